use rust_decimal::Decimal;
use serde::Deserialize;

/// A card in the authenticated user's inventory. `price` is the card's
/// current value, `purchase_price` what the user originally paid.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub player: Player,
    pub price: Decimal,
    pub purchase_price: Decimal,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team: Team,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Team {
    pub name: String,
}

/// One market page entry: a card offered for sale at `price`.
#[derive(Clone, Debug, Deserialize)]
pub struct Listing {
    pub id: String,
    pub price: Decimal,
    pub player: ListedPlayer,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListedPlayer {
    pub id: String,
    pub name: String,
}

/// Receipt for a card put up for sale.
#[derive(Clone, Debug, Deserialize)]
pub struct SoldCard {
    pub id: String,
}

/// Receipt for a purchased card.
#[derive(Clone, Debug, Deserialize)]
pub struct BoughtCard {
    pub id: String,
    pub player: PlayerName,
    pub price: Decimal,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerName {
    pub name: String,
}

// Wrapper shapes mirroring the GraphQL nesting. Only the leaves above are
// part of the public API.

#[derive(Debug, Deserialize)]
pub(crate) struct MeData {
    pub me: Me,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Me {
    pub cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarketData {
    pub market: Market,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Market {
    pub cards: CardConnection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CardConnection {
    pub edges: Vec<CardEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CardEdge {
    pub node: Listing,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SellData {
    pub sell_card: SellReceipt,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SellReceipt {
    pub card: SoldCard,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuyData {
    pub buy_card: BuyReceipt,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BuyReceipt {
    pub card: BoughtCard,
}

/// Top-level GraphQL response body. `errors` is present alongside or
/// instead of `data` when the service rejects an operation.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

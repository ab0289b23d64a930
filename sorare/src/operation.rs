use rust_decimal::Decimal;
use strum_macros::Display;

/// The fixed set of GraphQL operations the client issues. Each variant
/// carries the parameters its document embeds, and displays as the
/// operation's field name in the schema.
#[derive(Display, Clone, Debug)]
pub enum Operation {
    #[strum(serialize = "myCards")]
    MyCards,
    #[strum(serialize = "marketCards")]
    MarketCards { first: usize },
    #[strum(serialize = "sellCard")]
    SellCard { card_id: String, price: Decimal },
    #[strum(serialize = "buyCard")]
    BuyCard { card_id: String, price: Decimal },
}

impl Operation {
    /// Renders the GraphQL document sent as the request's `query` field.
    pub fn document(&self) -> String {
        match self {
            Self::MyCards => {
                "{ me { cards { id player { id name team { name } } price purchasePrice } } }"
                    .to_string()
            }
            Self::MarketCards { first } => format!(
                "{{ market {{ cards(first: {first}) {{ edges {{ node {{ id price player {{ id name }} }} }} }} }} }}"
            ),
            Self::SellCard { card_id, price } => format!(
                r#"mutation {{ sellCard(cardId: "{card_id}", price: {price}) {{ card {{ id }} }} }}"#
            ),
            Self::BuyCard { card_id, price } => format!(
                r#"mutation {{ buyCard(cardId: "{card_id}", price: {price}) {{ card {{ id player {{ name }} price }} }} }}"#
            ),
        }
    }
}

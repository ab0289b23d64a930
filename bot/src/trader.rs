use anyhow::Result;
use log::{error, info};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sorare::{Card, Client, Listing};

/// Sell threshold over the purchase price; also the assumed resale margin.
const PROFIT_MARGIN: Decimal = dec!(1.1);
const MARKET_PAGE_SIZE: usize = 10;

#[derive(Clone)]
pub(crate) struct Trader {
    client: Client,
}

impl Trader {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub(crate) async fn sell_profitable_cards(&self) -> Result<()> {
        let cards = self.client.my_cards().await?;

        for card in cards.iter().filter(|card| is_profitable(card)) {
            info!("Attempting to sell {} for {}", card.player.name, card.price);
            match self.client.sell_card(&card.id, card.price).await {
                Ok(sold) => info!("Listed card {} at {}", sold.id, card.price),
                Err(e) => error!("Failed to sell card {}: {e}", card.id),
            }
        }

        Ok(())
    }

    /// The budget bounds each listing on its own, not the pass total.
    pub(crate) async fn buy_affordable_cards(&self, budget: Decimal) -> Result<()> {
        let listings = self.client.market_cards(MARKET_PAGE_SIZE).await?;

        for listing in listings.iter().filter(|listing| is_affordable(listing, budget)) {
            info!(
                "Found {} for {}, with expected sale at {}",
                listing.player.name,
                listing.price,
                expected_sale_price(listing.price)
            );
            match self.client.buy_card(&listing.id, listing.price).await {
                Ok(card) => info!("Bought player {} for {}", card.player.name, card.price),
                Err(e) => error!("Failed to buy listing {}: {e}", listing.id),
            }
        }

        Ok(())
    }
}

fn is_profitable(card: &Card) -> bool {
    card.price >= card.purchase_price * PROFIT_MARGIN
}

fn is_affordable(listing: &Listing, budget: Decimal) -> bool {
    listing.price <= budget
}

/// Logged for the record; never gates a purchase.
fn expected_sale_price(price: Decimal) -> Decimal {
    price * PROFIT_MARGIN
}

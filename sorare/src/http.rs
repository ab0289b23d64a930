use crate::operation::Operation;
use crate::schema::{
    BoughtCard, BuyData, Card, Envelope, Listing, MarketData, MeData, SellData, SoldCard,
};
use crate::{Error, Result};
use log::debug;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::json;

const GRAPHQL_URL: &str = "https://api.sorare.com/graphql";

/// Thin client for the Sorare GraphQL endpoint. Clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    /// `token` is the bearer credential attached to every request. A
    /// client without one still sends requests; the service's rejection
    /// surfaces as a `Response` error.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(GRAPHQL_URL, token)
    }

    /// Builds a client that talks to `base_url` instead of the production
    /// endpoint.
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Fetches the authenticated user's cards.
    pub async fn my_cards(&self) -> Result<Vec<Card>> {
        let data: MeData = self.execute(Operation::MyCards).await?;
        Ok(data.me.cards)
    }

    /// Fetches the first `first` cards listed on the open market.
    pub async fn market_cards(&self, first: usize) -> Result<Vec<Listing>> {
        let data: MarketData = self.execute(Operation::MarketCards { first }).await?;
        Ok(data
            .market
            .cards
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect())
    }

    /// Puts an owned card up for sale at `price`.
    pub async fn sell_card(&self, card_id: &str, price: Decimal) -> Result<SoldCard> {
        let operation = Operation::SellCard {
            card_id: card_id.to_string(),
            price,
        };
        let data: SellData = self.execute(operation).await?;
        Ok(data.sell_card.card)
    }

    /// Buys a listed card at `price`.
    pub async fn buy_card(&self, card_id: &str, price: Decimal) -> Result<BoughtCard> {
        let operation = Operation::BuyCard {
            card_id: card_id.to_string(),
            price,
        };
        let data: BuyData = self.execute(operation).await?;
        Ok(data.buy_card.card)
    }

    /// Sends one POST carrying the operation's document and decodes the
    /// response. Every operation, query or mutation, goes through the same
    /// status and envelope checks.
    async fn execute<T: DeserializeOwned>(&self, operation: Operation) -> Result<T> {
        debug!("Executing {operation}");

        let mut request = self
            .http
            .post(self.base_url.as_str())
            .json(&json!({ "query": operation.document() }));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Response(operation, status, response.text().await?));
        }

        decode(operation, &response.text().await?)
    }
}

/// Decodes a 2xx response body. The envelope must parse, report no
/// errors, and carry `data`; anything else fails the operation.
fn decode<T: DeserializeOwned>(operation: Operation, body: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(body)
        .map_err(|_| Error::Deserialize(operation.clone(), body.to_string()))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<_> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(Error::Graphql(operation, messages.join("; ")));
    }

    envelope.data.ok_or(Error::MissingData(operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_returns_the_data_field() {
        let body = r#"{ "data": { "me": { "cards": [] } } }"#;
        let data: MeData = decode(Operation::MyCards, body).unwrap();
        assert!(data.me.cards.is_empty());
    }

    #[test]
    fn missing_data_fails_the_operation() {
        let result: Result<MeData> = decode(Operation::MyCards, "{}");
        assert!(matches!(result, Err(Error::MissingData(_))));
    }

    #[test]
    fn graphql_errors_fail_the_operation() {
        let body = r#"{ "data": null, "errors": [{ "message": "Not authorized" }] }"#;
        let result: Result<MeData> = decode(Operation::MyCards, body);
        match result {
            Err(Error::Graphql(_, messages)) => assert!(messages.contains("Not authorized")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn errors_take_precedence_over_partial_data() {
        let body = r#"{
            "data": { "me": { "cards": [] } },
            "errors": [{ "message": "Rate limited" }, { "message": "Try later" }]
        }"#;
        let result: Result<MeData> = decode(Operation::MyCards, body);
        match result {
            Err(Error::Graphql(_, messages)) => assert_eq!(messages, "Rate limited; Try later"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_fails_the_operation() {
        let result: Result<MeData> = decode(Operation::MyCards, "<html>bad gateway</html>");
        assert!(matches!(result, Err(Error::Deserialize(_, _))));
    }
}

//! Booking API request and response DTOs.
//!
//! These types map directly to the booking API's JSON. Responses use
//! `Option` and `#[serde(default)]` liberally: the API omits fields rather
//! than sending nulls, and which omissions are errors is decided in
//! [`super::convert`], not here.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::WireDate;

/// Client identification sent with every call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo<'a> {
    pub client_id: &'a str,
    pub client_version: &'a str,
}

/// Notification preferences sent when opening a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

/// The one passenger each search and price lookup asks for.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDto {
    pub age: i32,
    pub count: u8,
}

/// Body of `POST /stations/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSearchRequest<'a> {
    pub lang: &'a str,
    pub mask: &'a str,
    pub max_count: u8,
    pub client: ClientInfo<'a>,
}

/// Response from `POST /stations/search`, best match first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSearchResponse {
    #[serde(default)]
    pub stations: Option<Vec<StationDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /sessions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest<'a> {
    pub client: ClientInfo<'a>,
    pub notifications: NotificationPrefs,
}

/// Response from `POST /sessions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Station descriptor inside a journey search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRef<'a> {
    pub id: i64,
    pub name: &'a str,
}

/// Body of `POST /journeys/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySearchRequest<'a> {
    pub token: &'a str,
    pub from: StationRef<'a>,
    pub to: StationRef<'a>,
    /// Serialised as `/Date(<milliseconds>)/`.
    pub departure: WireDate,
    pub travel_class: i32,
    pub passengers: [PassengerDto; 1],
    pub client: ClientInfo<'a>,
}

/// Response from `POST /journeys/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySearchResponse {
    #[serde(default)]
    pub result: Option<JourneySearchResultDto>,
}

/// The result envelope of a journey search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySearchResultDto {
    #[serde(default)]
    pub handle: Option<i64>,

    #[serde(default)]
    pub connections: Option<Vec<ConnectionDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDto {
    pub id: i64,

    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// One leg of a connection.
///
/// Timestamps stay as optional strings here so that a bad or missing one is
/// reported as a malformed search result rather than a JSON error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    #[serde(default)]
    pub departure: Option<String>,

    #[serde(default)]
    pub arrival: Option<String>,

    #[serde(default)]
    pub from_name: String,

    #[serde(default)]
    pub to_name: String,

    /// Train category, e.g. "EC", "R", "Os".
    #[serde(default)]
    pub train_type: Option<LabelToken>,

    #[serde(default)]
    pub train_number: Option<LabelToken>,

    #[serde(default)]
    pub line_number: Option<LabelToken>,

    #[serde(default)]
    pub route_number: Option<LabelToken>,
}

impl LegDto {
    /// The four line-label tokens in display order.
    pub fn label_tokens(&self) -> [Option<&LabelToken>; 4] {
        [
            self.train_type.as_ref(),
            self.train_number.as_ref(),
            self.line_number.as_ref(),
            self.route_number.as_ref(),
        ]
    }
}

/// A line-label token: the API sends numbers for some and strings for others.
///
/// Anything else (floats, booleans, objects) lands in `Other` and is left
/// out of the label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LabelToken {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl LabelToken {
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            LabelToken::Number(n) => Some(Cow::Owned(n.to_string())),
            LabelToken::Text(s) => Some(Cow::Borrowed(s)),
            LabelToken::Other(_) => None,
        }
    }
}

/// Body of `POST /prices`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequestDto<'a> {
    pub token: &'a str,
    pub handle: i64,
    pub connection_ids: Vec<i64>,
    pub travel_class: i32,
    pub passengers: [PassengerDto; 1],
    pub client: ClientInfo<'a>,
}

/// Response from `POST /prices`, one entry per requested connection in
/// request order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    #[serde(default)]
    pub prices: Vec<PriceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    #[serde(default)]
    pub connection_id: Option<i64>,

    /// Price in minor units.
    pub price: i64,
}

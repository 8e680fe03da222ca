//! Conversion from booking API DTOs to domain types.

use crate::domain::{
    Connection, ConnectionId, Leg, MinorUnits, PriceQuote, SearchHandle, SearchResult, Station,
    TimeError, WireDate, line_label,
};

use super::types::{
    ConnectionDto, JourneySearchResponse, LabelToken, LegDto, PriceDto, StationDto,
};

/// Reasons a journey search response cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("missing result envelope")]
    MissingResult,

    #[error("result has no search handle")]
    MissingHandle,

    #[error("result has no connection list")]
    MissingConnections,

    #[error("connection {connection} leg {leg} has no {field}")]
    MissingTimestamp {
        connection: i64,
        leg: usize,
        field: &'static str,
    },

    #[error("connection {connection} leg {leg} {field}: {source}")]
    BadTimestamp {
        connection: i64,
        leg: usize,
        field: &'static str,
        source: TimeError,
    },
}

/// Pick the best station match; the API ranks them, we take the first.
pub fn first_station(stations: Option<Vec<StationDto>>) -> Option<Station> {
    stations
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|s| Station::new(s.id, s.name))
}

/// Convert a journey search response, preserving connection order.
pub fn convert_search_response(
    response: JourneySearchResponse,
) -> Result<SearchResult, ConversionError> {
    let result = response.result.ok_or(ConversionError::MissingResult)?;
    let handle = result.handle.ok_or(ConversionError::MissingHandle)?;
    let connections = result
        .connections
        .ok_or(ConversionError::MissingConnections)?
        .into_iter()
        .map(convert_connection)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchResult {
        handle: SearchHandle(handle),
        connections,
    })
}

fn convert_connection(dto: ConnectionDto) -> Result<Connection, ConversionError> {
    let legs = dto
        .legs
        .iter()
        .enumerate()
        .map(|(idx, leg)| convert_leg(dto.id, idx, leg))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Connection {
        id: ConnectionId(dto.id),
        legs,
    })
}

fn convert_leg(connection: i64, idx: usize, dto: &LegDto) -> Result<Leg, ConversionError> {
    let parse = |raw: Option<&str>, field: &'static str| {
        let raw = raw.ok_or(ConversionError::MissingTimestamp {
            connection,
            leg: idx,
            field,
        })?;
        WireDate::parse(raw).map_err(|source| ConversionError::BadTimestamp {
            connection,
            leg: idx,
            field,
            source,
        })
    };

    let tokens = dto
        .label_tokens()
        .map(|t| t.and_then(LabelToken::as_text));

    Ok(Leg {
        departure: parse(dto.departure.as_deref(), "departure")?,
        arrival: parse(dto.arrival.as_deref(), "arrival")?,
        from_name: dto.from_name.clone(),
        to_name: dto.to_name.clone(),
        line_label: line_label(tokens.iter().map(|t| t.as_deref())),
    })
}

/// Convert price entries, keeping their order.
pub fn convert_prices(prices: Vec<PriceDto>) -> Vec<PriceQuote> {
    prices
        .into_iter()
        .map(|p| PriceQuote {
            connection_id: p.connection_id.map(ConnectionId),
            amount: MinorUnits(p.price),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_response(json: &str) -> JourneySearchResponse {
        serde_json::from_str(json).unwrap()
    }

    const TWO_CONNECTIONS: &str = r#"{
        "result": {
            "handle": 4411,
            "connections": [
                {
                    "id": 31,
                    "legs": [
                        {
                            "departure": "/Date(1700000000000)/",
                            "arrival": "/Date(1700009000000)/",
                            "fromName": "Praha hl.n.",
                            "toName": "Brno hl.n.",
                            "trainType": "EC",
                            "trainNumber": 173,
                            "lineNumber": "",
                            "routeNumber": null
                        }
                    ]
                },
                {
                    "id": 12,
                    "legs": [
                        {
                            "departure": "/Date(1700001000000+0100)/",
                            "arrival": "/Date(1700004000000+0100)/",
                            "fromName": "Praha hl.n.",
                            "toName": "Pardubice hl.n.",
                            "trainType": "R",
                            "trainNumber": "981"
                        },
                        {
                            "departure": "/Date(1700005000000)/",
                            "arrival": "/Date(1700010000000)/",
                            "fromName": "Pardubice hl.n.",
                            "toName": "Brno hl.n.",
                            "trainType": "Os",
                            "trainNumber": 5011,
                            "lineNumber": "S",
                            "routeNumber": 4
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn convert_keeps_order_and_handle() {
        let result = convert_search_response(parse_response(TWO_CONNECTIONS)).unwrap();

        assert_eq!(result.handle, SearchHandle(4411));
        assert_eq!(
            result.connection_ids(),
            vec![ConnectionId(31), ConnectionId(12)]
        );
        assert_eq!(result.connections[0].transfers(), 0);
        assert_eq!(result.connections[1].transfers(), 1);
    }

    #[test]
    fn convert_builds_line_labels() {
        let result = convert_search_response(parse_response(TWO_CONNECTIONS)).unwrap();

        assert_eq!(result.connections[0].legs[0].line_label, "EC 173");
        assert_eq!(result.connections[1].legs[0].line_label, "R 981");
        assert_eq!(result.connections[1].legs[1].line_label, "Os 5011 S 4");
    }

    #[test]
    fn convert_parses_leg_times_and_names() {
        let result = convert_search_response(parse_response(TWO_CONNECTIONS)).unwrap();
        let leg = &result.connections[1].legs[0];

        assert_eq!(leg.departure.timestamp_millis(), 1_700_001_000_000);
        assert_eq!(leg.arrival.timestamp_millis(), 1_700_004_000_000);
        assert_eq!(leg.from_name, "Praha hl.n.");
        assert_eq!(leg.to_name, "Pardubice hl.n.");
    }

    #[test]
    fn missing_result_envelope() {
        let err = convert_search_response(parse_response("{}")).unwrap_err();
        assert_eq!(err, ConversionError::MissingResult);
    }

    #[test]
    fn missing_handle() {
        let err =
            convert_search_response(parse_response(r#"{"result": {"connections": []}}"#))
                .unwrap_err();
        assert_eq!(err, ConversionError::MissingHandle);
    }

    #[test]
    fn missing_connections() {
        let err = convert_search_response(parse_response(r#"{"result": {"handle": 1}}"#))
            .unwrap_err();
        assert_eq!(err, ConversionError::MissingConnections);
    }

    #[test]
    fn empty_connection_list_is_valid() {
        let result = convert_search_response(parse_response(
            r#"{"result": {"handle": 1, "connections": []}}"#,
        ))
        .unwrap();
        assert!(result.connections.is_empty());
    }

    #[test]
    fn bad_leg_timestamp() {
        let json = r#"{"result": {"handle": 1, "connections": [
            {"id": 9, "legs": [{"departure": "10:15", "arrival": "/Date(0)/"}]}
        ]}}"#;

        let err = convert_search_response(parse_response(json)).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::BadTimestamp {
                connection: 9,
                leg: 0,
                field: "departure",
                ..
            }
        ));
        assert!(err.to_string().starts_with("connection 9 leg 0 departure"));
    }

    #[test]
    fn missing_leg_timestamp() {
        let json = r#"{"result": {"handle": 1, "connections": [
            {"id": 9, "legs": [
                {"departure": "/Date(0)/", "arrival": "/Date(60000)/"},
                {"departure": "/Date(120000)/"}
            ]}
        ]}}"#;

        let err = convert_search_response(parse_response(json)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingTimestamp {
                connection: 9,
                leg: 1,
                field: "arrival",
            }
        );
        assert_eq!(err.to_string(), "connection 9 leg 1 has no arrival");
    }

    #[test]
    fn odd_label_tokens_left_out() {
        let json = r#"{"result": {"handle": 1, "connections": [
            {"id": 9, "legs": [{
                "departure": "/Date(0)/",
                "arrival": "/Date(60000)/",
                "trainType": "Ex",
                "trainNumber": 3.5,
                "lineNumber": false,
                "routeNumber": 12
            }]}
        ]}}"#;

        let result = convert_search_response(parse_response(json)).unwrap();
        assert_eq!(result.connections[0].legs[0].line_label, "Ex 12");
    }

    #[test]
    fn first_station_takes_top_match() {
        let stations = vec![
            StationDto {
                id: 5_457_076,
                name: "Praha hl.n.".into(),
            },
            StationDto {
                id: 5_457_256,
                name: "Praha-Smíchov".into(),
            },
        ];

        let station = first_station(Some(stations)).unwrap();
        assert_eq!(station, Station::new(5_457_076, "Praha hl.n."));
    }

    #[test]
    fn first_station_none_when_empty() {
        assert!(first_station(Some(Vec::new())).is_none());
        assert!(first_station(None).is_none());
    }

    #[test]
    fn prices_keep_order() {
        let quotes = convert_prices(vec![
            PriceDto {
                connection_id: Some(31),
                price: 24900,
            },
            PriceDto {
                connection_id: None,
                price: 19900,
            },
        ]);

        assert_eq!(quotes[0].connection_id, Some(ConnectionId(31)));
        assert_eq!(quotes[0].amount, MinorUnits(24900));
        assert_eq!(quotes[1].connection_id, None);
        assert_eq!(quotes[1].amount, MinorUnits(19900));
    }
}

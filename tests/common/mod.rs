//! Shared test fixtures for the Coinranking SDK integration tests.
//!
//! Provides a [`ScriptedTransport`] that answers from a queue of canned
//! responses and records every request it sees, plus JSON builders shaped
//! like real API payloads.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use coinranking_sdk::{
    CoinRankingSdk, HttpRequest, HttpResponse, NetworkError, Transport,
};
use serde_json::{json, Value};

pub const BTC_UUID: &str = "Qwsogvtv82FCd";

// ---------------------------------------------------------------------------
// ScriptedTransport
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<HttpResponse, NetworkError>>,
    requests: Vec<HttpRequest>,
}

/// Transport answering from a FIFO of scripted results.
///
/// Clones share the same script, so a test can keep one handle after moving
/// another into the SDK. An exhausted script answers `NoInternet`.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &Value) -> &Self {
        let bytes = serde_json::to_vec(body).unwrap();
        self.push(Ok(HttpResponse::new(status, bytes)))
    }

    pub fn push_raw(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(HttpResponse::new(status, body.as_bytes())))
    }

    pub fn push_error(&self, err: NetworkError) -> &Self {
        self.push(Err(err))
    }

    fn push(&self, response: Result<HttpResponse, NetworkError>) -> &Self {
        self.script.lock().unwrap().responses.push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }

    /// Query parameter `key` of the `index`-th recorded request.
    pub fn query_param(&self, index: usize, key: &str) -> Option<String> {
        let requests = self.requests();
        requests[index]
            .url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request.clone());
        script
            .responses
            .pop_front()
            .unwrap_or(Err(NetworkError::NoInternet))
    }
}

/// An SDK over `transport` with an in-memory favorites database.
pub fn sdk_with(transport: &ScriptedTransport) -> CoinRankingSdk {
    CoinRankingSdk::builder()
        .access_token("test-token")
        .in_memory_favorites(true)
        .transport(transport.clone())
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// JSON fixtures
// ---------------------------------------------------------------------------

/// A list row for coin number `n` (rank `n + 1`).
pub fn coin_json(n: usize) -> Value {
    json!({
        "uuid": format!("coin-uuid-{n:03}"),
        "symbol": format!("C{n}"),
        "name": format!("Coin {n:03}"),
        "color": "#f7931A",
        "iconUrl": format!("https://cdn.coinranking.com/icons/{n}.svg"),
        "marketCap": "159393904304",
        "price": "9370.9993109108",
        "listedAt": 1483228800,
        "tier": 1,
        "change": "-0.52",
        "rank": n + 1,
        "sparkline": ["9515.0454185372", null, "9489.2001087862"],
        "lowVolume": false,
        "coinrankingUrl": "https://coinranking.com/coin/Qwsogvtv82FCd+bitcoin-btc",
        "24hVolume": "6818750000",
        "btcPrice": "1",
        "contractAddresses": []
    })
}

/// A list page containing coins `start..start + count`.
pub fn list_page_json(start: usize, count: usize) -> Value {
    let coins: Vec<Value> = (start..start + count).map(coin_json).collect();
    json!({
        "status": "success",
        "data": {
            "stats": {
                "total": 3,
                "totalCoins": 22891,
                "totalMarkets": 38191,
                "totalExchanges": 185,
                "totalMarketCap": "3297534883024",
                "total24hVolume": "142362813640"
            },
            "coins": coins
        }
    })
}

pub fn btc_detail_json() -> Value {
    json!({
        "status": "success",
        "data": {
            "coin": {
                "uuid": BTC_UUID,
                "symbol": "BTC",
                "name": "Bitcoin",
                "description": "  Bitcoin is the first decentralized digital currency.\n",
                "color": "#f7931A",
                "iconUrl": "https://cdn.coinranking.com/Sy33Krudb/btc.svg",
                "websiteUrl": "https://bitcoin.org",
                "links": [
                    { "name": "bitcoin.org", "url": "https://bitcoin.org", "type": "website" }
                ],
                "supply": {
                    "confirmed": true,
                    "supplyAt": 1580000000,
                    "circulating": "18207162",
                    "total": "18207162",
                    "max": "21000000"
                },
                "24hVolume": "6818750000",
                "marketCap": "1593939043040",
                "fullyDilutedMarketCap": "196790000000",
                "price": "9370.9993109108",
                "btcPrice": "1",
                "priceAt": 1580000000,
                "change": "-0.52",
                "rank": 1,
                "numberOfMarkets": 9800,
                "numberOfExchanges": 190,
                "sparkline": ["9515.0454185372", "9540.1812284677"],
                "allTimeHigh": { "price": "19500.0", "timestamp": 1513555200 },
                "coinrankingUrl": "https://coinranking.com/coin/Qwsogvtv82FCd+bitcoin-btc",
                "tier": 1,
                "lowVolume": false,
                "listedAt": 1330214400,
                "hasContent": true,
                "notices": [],
                "contractAddresses": [],
                "tags": ["layer-1"]
            }
        }
    })
}

/// Samples newest first, as the API sends them, with one null price.
pub fn history_json() -> Value {
    json!({
        "status": "success",
        "data": {
            "change": "-0.52",
            "history": [
                { "price": "9370.99", "timestamp": 1580003600 },
                { "price": null, "timestamp": 1580002400 },
                { "price": "9401.12", "timestamp": 1580001200 },
                { "price": "9388.50", "timestamp": 1580000000 }
            ]
        }
    })
}

//! Wire form of orders.
//!
//! The transport hands over orders as tagged JSON packets. This is the only
//! place the string tag is looked at: decoding turns it into an `OrderKind`
//! so everything downstream matches on a closed enum.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::{Order, OrderKind};
use crate::world::{ActorId, PlayerId};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid order packet: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty order tag")]
    EmptyTag,
}

/// An order as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPacket {
    pub order: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_location: Option<[i32; 2]>,
    #[serde(default)]
    pub immediate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<u32>,
}

/// An order tagged with the client that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrder {
    pub client: u32,
    #[serde(flatten)]
    pub packet: OrderPacket,
}

impl OrderPacket {
    pub fn into_order(self) -> Result<Order, WireError> {
        if self.order.is_empty() {
            return Err(WireError::EmptyTag);
        }
        Ok(Order {
            kind: OrderKind::from_tag(&self.order),
            subject: self.subject.map(ActorId),
            target_string: self.target,
            target_location: self.target_location.map(|[x, y]| (x, y)),
            is_immediate: self.immediate,
            player: self.player.map(PlayerId),
        })
    }

    pub fn from_order(order: &Order) -> Self {
        OrderPacket {
            order: order.kind.tag().to_string(),
            subject: order.subject.map(|a| a.0),
            target: order.target_string.clone(),
            target_location: order.target_location.map(|(x, y)| [x, y]),
            immediate: order.is_immediate,
            player: order.player.map(|p| p.0),
        }
    }
}

/// Decodes a single order packet.
pub fn decode_order(s: &str) -> Result<Order, WireError> {
    let packet: OrderPacket = serde_json::from_str(s)?;
    packet.into_order()
}

pub fn encode_order(order: &Order) -> Result<String, WireError> {
    Ok(serde_json::to_string(&OrderPacket::from_order(order))?)
}

/// Decodes one frame's worth of orders, preserving their order.
pub fn decode_frame(s: &str) -> Result<Vec<(u32, Order)>, WireError> {
    let packets: Vec<ClientOrder> = serde_json::from_str(s)?;
    packets
        .into_iter()
        .map(|p| Ok((p.client, p.packet.into_order()?)))
        .collect()
}

pub fn encode_frame(orders: &[(u32, Order)]) -> Result<String, WireError> {
    let packets: Vec<ClientOrder> = orders
        .iter()
        .map(|(client, order)| ClientOrder {
            client: *client,
            packet: OrderPacket::from_order(order),
        })
        .collect();
    Ok(serde_json::to_string(&packets)?)
}

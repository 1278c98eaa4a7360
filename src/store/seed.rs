//! Starter data written on the first run.

use crate::core::{
    ExchangeRate, NewProduct, NewShipment, Product, Shipment, ShipmentMethod, ShipmentStatus,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub struct Seed {
    pub products: Vec<Product>,
    pub shipments: Vec<Shipment>,
    pub exchange_rate: ExchangeRate,
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

impl Seed {
    /// Default catalogue priced at `exchange_rate`. Derived fields come from
    /// the same rules as any other product.
    pub fn new(exchange_rate: ExchangeRate) -> Self {
        let now = exchange_rate.last_updated;
        let products = default_products()
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.into_product((i + 1).to_string(), &exchange_rate, now))
            .collect();
        let shipments = default_shipments()
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.into_shipment((i + 1).to_string()))
            .collect();

        Self {
            products,
            shipments,
            exchange_rate,
        }
    }
}

fn default_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Premium Leather Steering Cover".to_string(),
            sku: "CSK001".to_string(),
            initial_stock: 100,
            stock_out: 20,
            pending_stock: 5,
            notes: "Batch #A01".to_string(),
            batch_number: Some("A01".to_string()),
            category: "Interior".to_string(),
            cost_price_rmb: 8.5,
            selling_price: 35000,
        },
        NewProduct {
            name: "Universal Car Mat".to_string(),
            sku: "KMU002".to_string(),
            initial_stock: 80,
            stock_out: 10,
            pending_stock: 3,
            notes: "Batch #B02".to_string(),
            batch_number: Some("B02".to_string()),
            category: "Interior".to_string(),
            cost_price_rmb: 15.0,
            selling_price: 60000,
        },
        NewProduct {
            name: "High-End Silicone Wiper".to_string(),
            sku: "WSH003".to_string(),
            initial_stock: 120,
            stock_out: 15,
            pending_stock: 10,
            notes: "Batch #C03".to_string(),
            batch_number: Some("C03".to_string()),
            category: "Exterior".to_string(),
            cost_price_rmb: 6.0,
            selling_price: 28000,
        },
    ]
}

fn default_shipments() -> Vec<NewShipment> {
    vec![
        NewShipment {
            date: day(2025, 10, 10),
            method: ShipmentMethod::Sea,
            container_number: Some("CNT-SEA-8821".to_string()),
            awb_number: None,
            estimated_arrival: day(2025, 11, 5),
            total_products: 250,
            status: ShipmentStatus::InTransit,
            notes: "ETA confirmed".to_string(),
            forwarder_name: "DHL Global Forwarding".to_string(),
            products: Some(vec![]),
        },
        NewShipment {
            date: day(2025, 10, 15),
            method: ShipmentMethod::Air,
            container_number: None,
            awb_number: Some("AWB-AIR-5509".to_string()),
            estimated_arrival: day(2025, 10, 30),
            total_products: 50,
            status: ShipmentStatus::Received,
            notes: "Items stored in warehouse".to_string(),
            forwarder_name: "FedEx Express".to_string(),
            products: Some(vec![]),
        },
        NewShipment {
            date: day(2025, 10, 25),
            method: ShipmentMethod::Sea,
            container_number: Some("CNT-SEA-8890".to_string()),
            awb_number: None,
            estimated_arrival: day(2025, 11, 15),
            total_products: 300,
            status: ShipmentStatus::Processing,
            notes: "Loading in Guangzhou".to_string(),
            forwarder_name: "Maersk Line".to_string(),
            products: Some(vec![]),
        },
    ]
}

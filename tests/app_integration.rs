use importrack::cli::product::{AddProductArgs, UpdateProductArgs};
use importrack::cli::shipping::{AddShipmentArgs, UpdateShipmentArgs};
use importrack::core::config::AppConfig;
use importrack::core::{InventoryError, ShipmentMethod, ShipmentStatus, formulas};
use importrack::{AppCommand, open_inventory, run_command};
use std::fs;
use tempfile::TempDir;
use tracing::info;

mod test_utils {
    use super::*;

    /// Writes a config pointing the data path into `dir` and returns its path.
    pub fn write_config(dir: &TempDir, default_rate: f64) -> String {
        let config_path = dir.path().join("config.yaml");
        let data_path = dir.path().join("data");
        let config_content = format!(
            r#"
            data_path: "{}"
            default_rate: {}
            thresholds:
              low_stock: 10
              low_margin: 30
              high_margin: 50
        "#,
            data_path.display(),
            default_rate
        );
        fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path.to_str().unwrap().to_string()
    }

    pub fn update_product_args(id: &str) -> UpdateProductArgs {
        UpdateProductArgs {
            id: id.to_string(),
            name: None,
            sku: None,
            category: None,
            initial_stock: None,
            stock_out: None,
            pending_stock: None,
            cost_rmb: None,
            selling_price: None,
            batch_number: None,
            notes: None,
        }
    }
}

#[test_log::test]
fn test_first_run_seeds_store() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(&dir, 1850.0);

    let result = run_command(AppCommand::Stock { search: None }, Some(&config_path));
    assert!(result.is_ok(), "Stock command failed with: {:?}", result.err());

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let inventory = open_inventory(&config).unwrap();
    let products = inventory.products();
    info!(count = products.len(), "Seeded products");

    assert_eq!(products.len(), 3);
    assert_eq!(inventory.shipments().len(), 3);
    assert_eq!(inventory.exchange_rate().rmb_to_idr, 1850.0);
    assert_eq!(products[0].cost_price_idr, 15725);
}

#[test_log::test]
fn test_rate_command_reprices_persisted_products() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(&dir, 1850.0);

    run_command(AppCommand::Rate { rate: 2000.0 }, Some(&config_path)).unwrap();

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let inventory = open_inventory(&config).unwrap();
    assert_eq!(inventory.exchange_rate().rmb_to_idr, 2000.0);
    for product in inventory.products() {
        assert_eq!(
            product.cost_price_idr,
            formulas::to_target_currency(product.cost_price_rmb, 2000.0)
        );
        assert_eq!(
            product.margin,
            formulas::margin(product.selling_price, product.cost_price_idr)
        );
    }
}

#[test_log::test]
fn test_rate_command_rejects_non_positive_rate() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(&dir, 1850.0);

    let err = run_command(AppCommand::Rate { rate: 0.0 }, Some(&config_path)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<InventoryError>(),
        Some(&InventoryError::InvalidRate(0.0))
    );

    let config = AppConfig::load_from_path(&config_path).unwrap();
    assert_eq!(
        open_inventory(&config).unwrap().exchange_rate().rmb_to_idr,
        1850.0
    );
}

#[test_log::test]
fn test_product_add_and_update_flow() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(&dir, 1850.0);

    run_command(
        AppCommand::AddProduct(AddProductArgs {
            name: "Dashboard Phone Holder".to_string(),
            sku: "PHH005".to_string(),
            category: "Interior".to_string(),
            initial_stock: 60,
            stock_out: 5,
            pending_stock: 5,
            cost_rmb: 4.0,
            selling_price: 15000,
            batch_number: Some("D05".to_string()),
            notes: String::new(),
        }),
        Some(&config_path),
    )
    .unwrap();

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let added = {
        let inventory = open_inventory(&config).unwrap();
        let found = inventory.search_products("phh005");
        assert_eq!(found.len(), 1);
        found[0].clone()
    };
    assert_eq!(added.real_stock, 50);
    assert_eq!(added.cost_price_idr, 7400);
    assert_eq!(added.margin, 103);

    run_command(
        AppCommand::UpdateProduct(UpdateProductArgs {
            stock_out: Some(20),
            selling_price: Some(14800),
            ..test_utils::update_product_args(&added.id)
        }),
        Some(&config_path),
    )
    .unwrap();

    let inventory = open_inventory(&config).unwrap();
    let updated = inventory.product(&added.id).unwrap();
    assert_eq!(updated.real_stock, 35);
    assert_eq!(updated.cost_price_idr, 7400);
    assert_eq!(updated.margin, 100);

    let history = inventory.stock_history(&added.id);
    assert_eq!(history.len(), 1);
    assert_eq!((history[0].previous_stock, history[0].new_stock), (50, 35));
}

#[test_log::test]
fn test_update_unknown_product_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(&dir, 1850.0);

    let result = run_command(
        AppCommand::UpdateProduct(UpdateProductArgs {
            notes: Some("missing".to_string()),
            ..test_utils::update_product_args("does-not-exist")
        }),
        Some(&config_path),
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_shipment_add_and_update_flow() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(&dir, 1850.0);

    run_command(
        AppCommand::AddShipment(AddShipmentArgs {
            method: ShipmentMethod::Air,
            tracking: Some("AWB-AIR-7001".to_string()),
            date: Some(importrack::cli::parse_date("2025-10-20").unwrap()),
            eta: Some(importrack::cli::parse_date("2025-10-27").unwrap()),
            total_products: 40,
            status: ShipmentStatus::Processing,
            forwarder: "FedEx Express".to_string(),
            notes: String::new(),
            products: vec!["1".to_string()],
        }),
        Some(&config_path),
    )
    .unwrap();

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let added = {
        let inventory = open_inventory(&config).unwrap();
        let shipments = inventory.shipments();
        assert_eq!(shipments.len(), 4);
        shipments[3].clone()
    };
    assert_eq!(added.tracking_number(), Some("AWB-AIR-7001"));
    assert_eq!(added.products, Some(vec!["1".to_string()]));

    run_command(
        AppCommand::UpdateShipment(UpdateShipmentArgs {
            id: added.id.clone(),
            method: None,
            container_number: None,
            awb_number: None,
            date: None,
            eta: None,
            total_products: None,
            status: Some(ShipmentStatus::InTransit),
            forwarder: None,
            notes: None,
            products: None,
        }),
        Some(&config_path),
    )
    .unwrap();

    let inventory = open_inventory(&config).unwrap();
    let updated = inventory.shipment(&added.id).unwrap();
    assert_eq!(updated.status, ShipmentStatus::InTransit);
    assert_eq!(updated.estimated_arrival, added.estimated_arrival);

    for command in [AppCommand::Shipments, AppCommand::History { product_id: None }] {
        assert!(run_command(command, Some(&config_path)).is_ok());
    }
}

#[test_log::test]
fn test_missing_explicit_config_fails() {
    let result = run_command(
        AppCommand::Shipments,
        Some("/nonexistent/importrack/config.yaml"),
    );
    assert!(result.is_err());
}

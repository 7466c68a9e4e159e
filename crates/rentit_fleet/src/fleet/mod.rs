pub mod account;
pub mod customer;
pub mod dollars;
pub mod fleet_registry;
pub mod kilometers;
pub mod kmh;
pub mod settlement;
pub mod vehicle;
pub mod vehicle_class;
pub mod zone;

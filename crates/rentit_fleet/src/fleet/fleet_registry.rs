use fxhash::FxHashMap;
use tracing::{info, warn};

use crate::{
    error::FleetError,
    fleet::{
        account::OperatorAccount,
        customer::{CustomerIdx, CustomerProfile, DrivingLicense},
        dollars::Dollars,
        kilometers::Kilometers,
        settlement::Settlement,
        vehicle::{Plate, VehicleIdx, VehicleUnit},
        vehicle_class::VehicleClass,
        zone::ZoneGraph,
    },
    params::FleetParams,
    utils::enumerate_idx::EnumerateIdx,
};

/// Vehicles and customers of the operator, kept in registration order with a key index on
/// the side, plus the operator account.
///
/// Every mutation takes `&mut self`; a trip settlement is a single call, so odometer,
/// maintenance debit, reservation and payment are never observed half-applied.
pub struct FleetRegistry {
    params: FleetParams,
    zones: ZoneGraph,
    vehicles: Vec<VehicleUnit>,
    vehicle_index: FxHashMap<Plate, VehicleIdx>,
    customers: Vec<CustomerProfile>,
    customer_index: FxHashMap<DrivingLicense, CustomerIdx>,
    account: OperatorAccount,
}

impl Default for FleetRegistry {
    fn default() -> Self {
        Self::new(FleetParams::default())
    }
}

impl FleetRegistry {
    pub fn new(params: FleetParams) -> Self {
        Self {
            zones: ZoneGraph::new(params.hop_length),
            params,
            vehicles: Vec::new(),
            vehicle_index: FxHashMap::default(),
            customers: Vec::new(),
            customer_index: FxHashMap::default(),
            account: OperatorAccount::default(),
        }
    }

    pub fn params(&self) -> &FleetParams {
        &self.params
    }

    pub fn zones(&self) -> &ZoneGraph {
        &self.zones
    }

    pub fn vehicles(&self) -> &[VehicleUnit] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle_at(&self, vehicle_id: VehicleIdx) -> &VehicleUnit {
        &self.vehicles[vehicle_id]
    }

    #[cfg(test)]
    pub(crate) fn vehicle_at_mut(&mut self, vehicle_id: VehicleIdx) -> &mut VehicleUnit {
        &mut self.vehicles[vehicle_id]
    }

    pub fn vehicle_idx(&self, plate: &Plate) -> Option<VehicleIdx> {
        self.vehicle_index.get(plate).copied()
    }

    pub fn vehicle(&self, plate: &Plate) -> Option<&VehicleUnit> {
        self.vehicle_idx(plate).map(|idx| &self.vehicles[idx])
    }

    pub fn add_vehicle(&mut self, mut vehicle: VehicleUnit) -> Result<VehicleIdx, FleetError> {
        if self.vehicle_index.contains_key(vehicle.plate()) {
            return Err(FleetError::DuplicatePlate(vehicle.plate().clone()));
        }

        vehicle.align_service_threshold(self.params.maintenance_interval);

        let idx = VehicleIdx::new(self.vehicles.len());
        self.vehicle_index.insert(vehicle.plate().clone(), idx);
        self.vehicles.push(vehicle);

        Ok(idx)
    }

    /// Replaces the vehicle registered under the same plate, keeping its position in the
    /// registration order. Returns the previous record.
    pub fn update_vehicle(&mut self, mut vehicle: VehicleUnit) -> Result<VehicleUnit, FleetError> {
        let idx = self
            .vehicle_idx(vehicle.plate())
            .ok_or_else(|| FleetError::UnknownVehicle(vehicle.plate().clone()))?;

        vehicle.align_service_threshold(self.params.maintenance_interval);

        Ok(std::mem::replace(&mut self.vehicles[idx], vehicle))
    }

    pub fn remove_vehicle(&mut self, plate: &Plate) -> Result<VehicleUnit, FleetError> {
        let removed_idx = self
            .vehicle_index
            .remove(plate)
            .ok_or_else(|| FleetError::UnknownVehicle(plate.clone()))?;

        let removed = self.vehicles.remove(removed_idx.get());
        self.vehicle_index.values_mut().for_each(|idx| {
            if let Some(shifted) = idx.shifted_after_removal(removed_idx) {
                *idx = shifted;
            }
        });

        Ok(removed)
    }

    /// Puts a reserved or serviced vehicle back into the pool.
    pub fn release_vehicle(&mut self, plate: &Plate) -> Result<(), FleetError> {
        let idx = self
            .vehicle_idx(plate)
            .ok_or_else(|| FleetError::UnknownVehicle(plate.clone()))?;

        self.vehicles[idx].make_available();
        Ok(())
    }

    pub fn release_all(&mut self) {
        self.vehicles.iter_mut().for_each(VehicleUnit::make_available);
    }

    /// The most recently registered vehicle of `class`, regardless of its availability.
    pub fn last_registered_of_class(&self, class: VehicleClass) -> Option<&VehicleUnit> {
        self.vehicles
            .iter()
            .rev()
            .find(|vehicle| vehicle.class() == class)
    }

    /// Vehicles that could take a `class` request right now, in registration order.
    pub fn eligible_vehicles(
        &self,
        class: VehicleClass,
    ) -> impl Iterator<Item = (VehicleIdx, &VehicleUnit)> {
        self.vehicles
            .iter()
            .enumerate_idx()
            .filter(move |(_, vehicle)| vehicle.is_eligible_for(class))
    }

    pub fn customers(&self) -> &[CustomerProfile] {
        &self.customers
    }

    pub fn customer(&self, license: &DrivingLicense) -> Option<&CustomerProfile> {
        self.customer_index
            .get(license)
            .map(|&idx| &self.customers[idx])
    }

    pub fn add_customer(&mut self, customer: CustomerProfile) -> Result<CustomerIdx, FleetError> {
        if self.customer_index.contains_key(customer.license()) {
            return Err(FleetError::DuplicateLicense(customer.license().clone()));
        }

        let idx = CustomerIdx::new(self.customers.len());
        self.customer_index.insert(customer.license().clone(), idx);
        self.customers.push(customer);

        Ok(idx)
    }

    pub fn update_customer(
        &mut self,
        customer: CustomerProfile,
    ) -> Result<CustomerProfile, FleetError> {
        let idx = *self
            .customer_index
            .get(customer.license())
            .ok_or_else(|| FleetError::UnknownCustomer(customer.license().clone()))?;

        Ok(std::mem::replace(&mut self.customers[idx], customer))
    }

    pub fn remove_customer(
        &mut self,
        license: &DrivingLicense,
    ) -> Result<CustomerProfile, FleetError> {
        let removed_idx = self
            .customer_index
            .remove(license)
            .ok_or_else(|| FleetError::UnknownCustomer(license.clone()))?;

        let removed = self.customers.remove(removed_idx.get());
        self.customer_index.values_mut().for_each(|idx| {
            if let Some(shifted) = idx.shifted_after_removal(removed_idx) {
                *idx = shifted;
            }
        });

        Ok(removed)
    }

    pub fn account(&self) -> &OperatorAccount {
        &self.account
    }

    pub fn balance(&self) -> Dollars {
        self.account.balance()
    }

    /// Manual correction of the operator balance, booked as an adjustment.
    pub fn adjust_balance(&mut self, delta: Dollars) {
        self.account.adjust(delta);
    }

    /// Settles a matched trip on `vehicle_id`.
    ///
    /// The odometer is advanced first; a maintenance debit triggered by it is booked before
    /// the trip payment. Trip time and cost are then priced, the vehicle is reserved, and
    /// the cost is credited.
    pub(crate) fn settle(&mut self, vehicle_id: VehicleIdx, distance: Kilometers) -> Settlement {
        let interval = self.params.maintenance_interval;
        let maintenance_cost = self.params.maintenance_cost;
        let vehicle = &mut self.vehicles[vehicle_id];

        let serviced = vehicle.accrue_distance(distance, interval);
        if serviced {
            vehicle.service(interval);
            self.account.debit_maintenance(vehicle.plate(), maintenance_cost);
            warn!(
                plate = %vehicle.plate(),
                odometer = %vehicle.total_distance(),
                "Vehicle reached its service point, {} booked for maintenance",
                maintenance_cost
            );
        }

        let travel_time = vehicle.travel_time(distance);
        let cost = vehicle.cost(distance);
        vehicle.reserve();
        self.account.credit_trip(vehicle.plate(), cost);

        info!(
            plate = %vehicle.plate(),
            %distance,
            %cost,
            "Trip settled"
        );

        Settlement {
            plate: vehicle.plate().clone(),
            distance,
            travel_time,
            cost,
            serviced,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use crate::{
        fleet::{account::LedgerEntryKind, vehicle::VehicleStatus},
        test_utils::{customer, eco, mid_class},
    };

    use super::*;

    #[test]
    fn test_add_rejects_duplicate_plate() {
        let mut registry = FleetRegistry::default();
        registry.add_vehicle(eco("ECO123")).unwrap();

        assert_eq!(
            registry.add_vehicle(eco("ECO123")),
            Err(FleetError::DuplicatePlate(Plate::new("ECO123")))
        );
        assert_eq!(registry.vehicles().len(), 1);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut registry = FleetRegistry::default();
        registry.add_vehicle(eco("A")).unwrap();
        registry.add_vehicle(eco("B")).unwrap();
        registry.add_vehicle(eco("C")).unwrap();

        let replacement = VehicleUnit::new(VehicleClass::Eco, "B", "Honda", "Civic");
        let previous = registry.update_vehicle(replacement).unwrap();

        assert_eq!(previous.brand(), "Tesla");
        assert_eq!(registry.vehicles()[1].brand(), "Honda");
        assert_eq!(
            registry.update_vehicle(eco("Z")),
            Err(FleetError::UnknownVehicle(Plate::new("Z")))
        );
    }

    #[test]
    fn test_remove_reindexes_following_vehicles() {
        let mut registry = FleetRegistry::default();
        registry.add_vehicle(eco("A")).unwrap();
        registry.add_vehicle(mid_class("B")).unwrap();
        registry.add_vehicle(eco("C")).unwrap();

        let removed = registry.remove_vehicle(&Plate::new("A")).unwrap();

        assert_eq!(removed.plate().as_str(), "A");
        assert_eq!(registry.vehicle_idx(&Plate::new("B")), Some(VehicleIdx::new(0)));
        assert_eq!(registry.vehicle_idx(&Plate::new("C")), Some(VehicleIdx::new(1)));
        assert_eq!(registry.vehicle(&Plate::new("C")).unwrap().plate().as_str(), "C");
        assert!(registry.remove_vehicle(&Plate::new("A")).is_err());
    }

    #[test]
    fn test_customer_crud() {
        let mut registry = FleetRegistry::default();
        registry.add_customer(customer("DL1", VehicleClass::Eco)).unwrap();
        registry.add_customer(customer("DL2", VehicleClass::Deluxe)).unwrap();

        assert!(matches!(
            registry.add_customer(customer("DL1", VehicleClass::MidClass)),
            Err(FleetError::DuplicateLicense(_))
        ));

        registry
            .update_customer(customer("DL1", VehicleClass::MidClass))
            .unwrap();
        assert_eq!(
            registry.customer(&"DL1".into()).unwrap().trip().class,
            VehicleClass::MidClass
        );

        registry.remove_customer(&"DL1".into()).unwrap();
        assert_eq!(registry.customers().len(), 1);
        assert_eq!(
            registry.customer(&"DL2".into()).unwrap().license().as_str(),
            "DL2"
        );
    }

    #[test]
    fn test_last_registered_of_class() {
        let mut registry = FleetRegistry::default();
        registry.add_vehicle(mid_class("M1")).unwrap();
        registry.add_vehicle(eco("E1")).unwrap();
        registry.add_vehicle(mid_class("M2")).unwrap();

        assert_eq!(
            registry
                .last_registered_of_class(VehicleClass::MidClass)
                .map(|vehicle| vehicle.plate().as_str()),
            Some("M2")
        );
        assert!(
            registry
                .last_registered_of_class(VehicleClass::Deluxe)
                .is_none()
        );
    }

    #[test]
    fn test_settle_books_trip() {
        let mut registry = FleetRegistry::default();
        let idx = registry.add_vehicle(eco("ECO123")).unwrap();

        let settlement = registry.settle(idx, Kilometers::new(15));

        assert_eq!(settlement.cost, Dollars::new(15));
        assert_eq!(settlement.travel_time, SignedDuration::from_hours(1));
        assert!(!settlement.serviced);
        assert_eq!(registry.balance(), Dollars::new(15));
        assert_eq!(registry.vehicle_at(idx).status(), VehicleStatus::Reserved);
    }

    #[test]
    fn test_settle_debits_maintenance_before_payment() {
        let mut registry = FleetRegistry::default();
        let mut builder = crate::fleet::vehicle::VehicleUnitBuilder::default();
        builder
            .set_plate("ECO123")
            .set_class(VehicleClass::Eco)
            .set_odometer(Kilometers::new(1485));
        let idx = registry.add_vehicle(builder.build().unwrap()).unwrap();

        let settlement = registry.settle(idx, Kilometers::new(15));

        assert!(settlement.serviced);
        assert_eq!(registry.balance(), Dollars::new(-285));

        let kinds: Vec<LedgerEntryKind> = registry
            .account()
            .ledger()
            .iter()
            .map(|entry| entry.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![LedgerEntryKind::Maintenance, LedgerEntryKind::TripPayment]
        );

        let vehicle = registry.vehicle_at(idx);
        assert_eq!(vehicle.next_service_at(), Kilometers::new(3000));
        assert!(vehicle.is_serviced());
        assert!(!vehicle.is_available());
        assert_eq!(vehicle.status(), VehicleStatus::UnderMaintenance);
    }

    #[test]
    fn test_release_vehicle() {
        let mut registry = FleetRegistry::default();
        let idx = registry.add_vehicle(eco("ECO123")).unwrap();
        registry.settle(idx, Kilometers::new(5));

        registry.release_vehicle(&Plate::new("ECO123")).unwrap();

        assert!(registry.vehicle_at(idx).is_available());
        assert!(registry.release_vehicle(&Plate::new("NOPE")).is_err());
    }

    #[test]
    fn test_custom_interval_realigns_threshold() {
        let mut registry = FleetRegistry::new(FleetParams {
            maintenance_interval: Kilometers::new(100),
            ..FleetParams::default()
        });
        let idx = registry.add_vehicle(eco("ECO123")).unwrap();

        assert_eq!(registry.vehicle_at(idx).next_service_at(), Kilometers::new(100));
    }

    #[test]
    fn test_update_realigns_threshold_to_custom_interval() {
        let mut registry = FleetRegistry::new(FleetParams {
            maintenance_interval: Kilometers::new(100),
            ..FleetParams::default()
        });
        let idx = registry.add_vehicle(eco("ECO123")).unwrap();

        let mut builder = crate::fleet::vehicle::VehicleUnitBuilder::default();
        builder
            .set_plate("ECO123")
            .set_class(VehicleClass::MidClass)
            .set_odometer(Kilometers::new(250));
        registry.update_vehicle(builder.build().unwrap()).unwrap();

        let vehicle = registry.vehicle_at(idx);
        assert_eq!(vehicle.class(), VehicleClass::MidClass);
        assert_eq!(vehicle.next_service_at(), Kilometers::new(300));

        registry.update_vehicle(eco("ECO123")).unwrap();
        assert_eq!(registry.vehicle_at(idx).next_service_at(), Kilometers::new(100));
    }

    #[test]
    fn test_settle_oversized_trip_saturates() {
        let mut registry = FleetRegistry::default();
        let idx = registry.add_vehicle(eco("ECO123")).unwrap();

        let settlement = registry.settle(idx, Kilometers::new(u64::MAX / 2) * 3);

        assert_eq!(settlement.distance, Kilometers::new(u64::MAX));
        assert_eq!(settlement.travel_time, SignedDuration::MAX);
        assert_eq!(settlement.cost, Dollars::new(i64::MAX));
        assert_eq!(registry.balance(), Dollars::new(i64::MAX));
        assert_eq!(
            registry.vehicle_at(idx).total_distance(),
            Kilometers::new(u64::MAX)
        );
    }
}

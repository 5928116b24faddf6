use super::dto::ListVehiclesDto;
use super::record::VehicleRecord;
use crate::modules::common::store_error::StoreError;
use crate::modules::plate::{classifier::identify_country, stats::PlateStats};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct VehicleTable {
    last_id: i32,

    /// id -> vehicle
    rows: BTreeMap<i32, VehicleRecord>,
}

impl VehicleTable {
    fn check_plate_unique(&self, plate: &str, except_id: Option<i32>) -> Result<(), StoreError> {
        let in_use = self
            .rows
            .values()
            .any(|v| v.plate == plate && Some(v.id) != except_id);

        if in_use {
            return Err(StoreError::UniqueViolation { column: "plate" });
        }

        Ok(())
    }
}

fn contains_ignoring_case(value: &str, search: &Option<String>) -> bool {
    match search.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => value.to_lowercase().contains(&s.to_lowercase()),
        _ => true,
    }
}

/// In process vehicle store, cloning it yields a handle to the same vehicles.
#[derive(Clone, Default)]
pub struct VehicleRepository {
    table: Arc<RwLock<VehicleTable>>,
}

pub fn new_vehicle_repository() -> VehicleRepository {
    VehicleRepository::default()
}

impl VehicleRepository {
    /// stores a new vehicle, assigning it the next id
    pub async fn create_vehicle(&self, mut record: VehicleRecord) -> Result<VehicleRecord, StoreError> {
        let mut table = self.table.write().await;

        table.check_plate_unique(&record.plate, None)?;

        table.last_id += 1;
        record.id = table.last_id;
        table.rows.insert(record.id, record.clone());

        Ok(record)
    }

    /// replaces every column of a stored vehicle
    pub async fn update_vehicle(
        &self,
        id: i32,
        mut record: VehicleRecord,
    ) -> Result<VehicleRecord, StoreError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Err(StoreError::NotFound);
        }

        table.check_plate_unique(&record.plate, Some(id))?;

        record.id = id;
        table.rows.insert(id, record.clone());

        Ok(record)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<VehicleRecord, StoreError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub async fn delete_vehicle(&self, id: i32) -> Result<VehicleRecord, StoreError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or(StoreError::NotFound)
    }

    /// lists vehicles matching every given filter, newest first
    pub async fn list_vehicles(&self, filter: &ListVehiclesDto) -> Vec<VehicleRecord> {
        let table = self.table.read().await;

        table
            .rows
            .values()
            .rev()
            .filter(|v| contains_ignoring_case(&v.brand, &filter.brand))
            .filter(|v| contains_ignoring_case(&v.model, &filter.model))
            .filter(|v| contains_ignoring_case(&v.plate, &filter.plate))
            .filter(|v| match filter.country {
                Some(country) => identify_country(&v.plate).country() == Some(country),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// counts the stored plates per identified country
    pub async fn plate_stats(&self) -> PlateStats {
        let table = self.table.read().await;

        PlateStats::from_plates(table.rows.values().map(|v| v.plate.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::{error_codes::PLATE_IN_USE, responses::SimpleError};
    use http::StatusCode;
    use crate::modules::plate::country::Country;

    fn record(brand: &str, plate: &str) -> VehicleRecord {
        VehicleRecord {
            id: 0,
            brand: brand.to_string(),
            model: String::from("Model"),
            plate: plate.to_string(),
            state_id: 1,
            state: String::from("Disponível"),
            price: 1000.0,
            city_id: 1,
            city: String::from("Lisboa"),
            responsible_id: None,
            buyer_id: None,
            sale_date: None,
        }
    }

    #[tokio::test]
    async fn assigns_incrementing_ids() {
        let repo = new_vehicle_repository();

        let a = repo.create_vehicle(record("Fiat", "AB-12-CD")).await.unwrap();
        let b = repo.create_vehicle(record("Seat", "1234-FGH")).await.unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(repo.find_by_id(2).await.unwrap().brand, "Seat");
    }

    #[tokio::test]
    async fn rejects_duplicated_plates() {
        let repo = new_vehicle_repository();
        repo.create_vehicle(record("Fiat", "AB-12-CD")).await.unwrap();

        let err = repo.create_vehicle(record("Opel", "AB-12-CD")).await.unwrap_err();
        assert_eq!(err, StoreError::UniqueViolation { column: "plate" });

        let (status, body) = <(StatusCode, SimpleError)>::from(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error(), PLATE_IN_USE);
    }

    #[tokio::test]
    async fn update_keeps_id_and_allows_same_plate() {
        let repo = new_vehicle_repository();
        let created = repo.create_vehicle(record("Fiat", "AB-12-CD")).await.unwrap();

        let updated = repo
            .update_vehicle(created.id, record("Fiat Punto", "AB-12-CD"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(repo.find_by_id(created.id).await.unwrap().brand, "Fiat Punto");
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = new_vehicle_repository();

        assert_eq!(repo.find_by_id(9).await.unwrap_err(), StoreError::NotFound);
        assert_eq!(repo.delete_vehicle(9).await.unwrap_err(), StoreError::NotFound);
        assert_eq!(
            repo.update_vehicle(9, record("Fiat", "AB-12-CD")).await.unwrap_err(),
            StoreError::NotFound
        );
    }

    #[tokio::test]
    async fn lists_newest_first_with_filters() {
        let repo = new_vehicle_repository();
        repo.create_vehicle(record("Fiat", "AB-12-CD")).await.unwrap();
        repo.create_vehicle(record("Seat", "1234-FGH")).await.unwrap();
        repo.create_vehicle(record("fiat", "AB-123-CD")).await.unwrap();

        let all = repo.list_vehicles(&ListVehiclesDto::default()).await;
        assert_eq!(all.iter().map(|v| v.id).collect::<Vec<_>>(), vec![3, 2, 1]);

        let fiats = repo
            .list_vehicles(&ListVehiclesDto {
                brand: Some(String::from("FIAT")),
                ..Default::default()
            })
            .await;
        assert_eq!(fiats.len(), 2);

        let french = repo
            .list_vehicles(&ListVehiclesDto {
                country: Some(Country::France),
                ..Default::default()
            })
            .await;
        assert_eq!(french.len(), 1);
        assert_eq!(french[0].plate, "AB-123-CD");
    }

    #[tokio::test]
    async fn counts_plates_per_country() {
        let repo = new_vehicle_repository();
        repo.create_vehicle(record("Fiat", "AB-12-CD")).await.unwrap();
        repo.create_vehicle(record("Seat", "1234-FGH")).await.unwrap();
        repo.create_vehicle(record("Old", "LEGACY1")).await.unwrap();

        let stats = repo.plate_stats().await;

        assert_eq!(stats.total, 3);
        assert_eq!(stats.portugal, 1);
        assert_eq!(stats.spain, 1);
        assert_eq!(stats.invalid, 1);
    }
}

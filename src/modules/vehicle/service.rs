use super::dto::ListVehiclesDto;
use super::form::RawVehicleForm;
use super::record::VehicleRecord;
use super::repository::VehicleRepository;
use super::validation::{validate_submission, FormRules, ValidationReport};
use crate::modules::buyer::repository::BuyerRepository;
use crate::modules::auth::{
    constants::Permission,
    session::{MissingPermission, SessionContext},
};
use crate::modules::common::{
    responses::{internal_error_res, SimpleError},
    store_error::StoreError,
};
use crate::modules::plate::stats::PlateStats;
use anyhow::Context;
use http::StatusCode;
use std::fmt;
use tracing::{error, info};

#[derive(Debug)]
pub enum ServiceError {
    Forbidden(MissingPermission),

    /// the submitted form has violations, nothing was stored
    Invalid(ValidationReport),

    Store(StoreError),

    Internal(anyhow::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Forbidden(missing) => write!(f, "{}", missing),
            ServiceError::Invalid(report) => write!(f, "invalid vehicle form:\n{}", report.to_message()),
            ServiceError::Store(err) => write!(f, "{}", err),
            ServiceError::Internal(err) => write!(f, "{:#}", err),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<MissingPermission> for ServiceError {
    fn from(err: MissingPermission) -> Self {
        ServiceError::Forbidden(err)
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}

impl From<ServiceError> for (StatusCode, SimpleError) {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Forbidden(err) => err.into(),
            ServiceError::Invalid(report) => {
                (StatusCode::BAD_REQUEST, SimpleError::from(report.to_message()))
            }
            ServiceError::Store(err) => err.into(),
            ServiceError::Internal(err) => {
                error!("[VEHICLE] {:#}", err);
                internal_error_res()
            }
        }
    }
}

type ServiceResult<T> = Result<T, ServiceError>;

/// Orchestrates vehicle submissions: permission gate, form validation and storage.
#[derive(Clone)]
pub struct VehicleService {
    repository: VehicleRepository,
    buyers: BuyerRepository,
    rules: FormRules,
}

pub fn new_vehicle_service(
    repository: VehicleRepository,
    buyers: BuyerRepository,
    rules: FormRules,
) -> VehicleService {
    VehicleService {
        repository,
        buyers,
        rules,
    }
}

impl VehicleService {
    /// validates a form without storing anything, no permission is needed
    pub fn validate(&self, raw: &RawVehicleForm) -> ValidationReport {
        validate_submission(raw, &self.rules)
    }

    async fn record_from(&self, raw: &RawVehicleForm) -> ServiceResult<VehicleRecord> {
        let report = self.validate(raw);

        if !report.is_valid() {
            return Err(ServiceError::Invalid(report));
        }

        if let Some(buyer) = &raw.buyer {
            if self.buyers.find_by_id(buyer.id).await.is_err() {
                return Err(ServiceError::Invalid(ValidationReport {
                    violations: vec![format!("the selected buyer ({}) does not exist", buyer.id)],
                    plate_guidance: None,
                }));
            }
        }

        let form = raw
            .extract()
            .context("form extraction failed after validation")
            .map_err(ServiceError::Internal)?;

        VehicleRecord::from_form(&form, &self.rules).map_err(ServiceError::Invalid)
    }

    pub async fn create(
        &self,
        ctx: &SessionContext,
        raw: &RawVehicleForm,
    ) -> ServiceResult<VehicleRecord> {
        ctx.require(Permission::CreateVehicle)?;

        let record = self.record_from(raw).await?;
        let created = self.repository.create_vehicle(record).await?;

        info!(user_id = ctx.user_id, vehicle_id = created.id, "[VEHICLE] created");

        Ok(created)
    }

    pub async fn update(
        &self,
        ctx: &SessionContext,
        id: i32,
        raw: &RawVehicleForm,
    ) -> ServiceResult<VehicleRecord> {
        ctx.require(Permission::UpdateVehicle)?;

        let record = self.record_from(raw).await?;
        let updated = self.repository.update_vehicle(id, record).await?;

        info!(user_id = ctx.user_id, vehicle_id = id, "[VEHICLE] updated");

        Ok(updated)
    }

    pub async fn delete(&self, ctx: &SessionContext, id: i32) -> ServiceResult<VehicleRecord> {
        ctx.require(Permission::DeleteVehicle)?;

        let deleted = self.repository.delete_vehicle(id).await?;

        info!(user_id = ctx.user_id, vehicle_id = id, "[VEHICLE] deleted");

        Ok(deleted)
    }

    pub async fn get(&self, ctx: &SessionContext, id: i32) -> ServiceResult<VehicleRecord> {
        ctx.require(Permission::ListVehicles)?;

        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn list(
        &self,
        ctx: &SessionContext,
        filter: &ListVehiclesDto,
    ) -> ServiceResult<Vec<VehicleRecord>> {
        ctx.require(Permission::ListVehicles)?;

        Ok(self.repository.list_vehicles(filter).await)
    }

    pub async fn plate_stats(&self, ctx: &SessionContext) -> ServiceResult<PlateStats> {
        ctx.require(Permission::ListVehicles)?;

        Ok(self.repository.plate_stats().await)
    }
}

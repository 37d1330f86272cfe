use sqlx::PgPool;
use tracing::warn;
use validator::Validate;

use crate::dto::common::FormResult;
use crate::dto::customer_dto::{CreateCustomerRequest, SubscribeRequest};
use crate::repositories::classified_repository::ClassifiedRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;

/// Flujos de formulario: reserva y boletín.
///
/// Los problemas del usuario (datos inválidos, duplicados) se devuelven como
/// FormResult con HTTP 200 para que el frontend los pinte inline. Solo los
/// errores de infraestructura escapan como AppError.
pub struct CustomerController {
    repository: CustomerRepository,
    classifieds: ClassifiedRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool.clone()),
            classifieds: ClassifiedRepository::new(pool),
        }
    }

    /// Paso final del asistente de reserva
    pub async fn reserve(&self, request: CreateCustomerRequest) -> Result<FormResult, AppError> {
        if let Err(e) = request.validate() {
            warn!("⚠️ Reserva con datos inválidos: {}", e);
            return Ok(FormResult::fail("Invalid data"));
        }

        if request.terms != "true" {
            return Ok(FormResult::fail("You must accept the terms"));
        }

        let classified = match self.classifieds.find_by_slug(&request.slug).await? {
            Some(classified) => classified,
            None => {
                warn!("⚠️ Reserva sobre un slug inexistente: {}", request.slug);
                return Ok(FormResult::fail("Something went wrong"));
            }
        };

        self.repository
            .create_reservation(
                &request.first_name,
                &request.last_name,
                &request.email,
                &request.mobile,
                request.date,
                true,
                classified.id,
            )
            .await?;

        Ok(FormResult::ok("Reservation Successful!"))
    }

    /// Alta en el boletín de novedades
    pub async fn subscribe(&self, request: SubscribeRequest) -> Result<FormResult, AppError> {
        if let Err(e) = request.validate() {
            warn!("⚠️ Suscripción con datos inválidos: {}", e);
            return Ok(FormResult::fail("Invalid data"));
        }

        if self.repository.subscriber_exists(&request.email).await? {
            return Ok(FormResult::fail("You are already subscribed"));
        }

        let created = self
            .repository
            .create_subscriber(&request.first_name, &request.last_name, &request.email)
            .await;

        match created {
            Ok(_) => Ok(FormResult::ok("Subscribed successfully!")),
            // Dos submits simultáneos pueden pasar el exists() y chocar en el insert
            Err(AppError::Conflict(_)) => Ok(FormResult::fail("You are already subscribed")),
            Err(e) => Err(e),
        }
    }
}

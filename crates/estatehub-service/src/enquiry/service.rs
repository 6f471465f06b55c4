//! Enquiry operations.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use estatehub_auth::ownership::{OwnershipAction, OwnershipGuard};
use estatehub_core::error::AppError;
use estatehub_core::types::{EnquiryId, PropertyId};
use estatehub_database::store::{EnquiryStore, PropertyStore, Stores, UserStore};
use estatehub_entity::enquiry::{CreateEnquiry, Enquiry, EnquiryDetails, EnquiryStatus};

use crate::context::RequestContext;
use crate::validation::{require_text, validate};

/// Body for sending an enquiry.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryInput {
    /// Listing the enquiry is about.
    pub property_id: Option<String>,
    /// Message body.
    #[validate(length(max = 2000, message = "Message cannot be more than 2000 characters"))]
    pub message: Option<String>,
}

/// Body for changing an enquiry status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusInput {
    /// One of `pending`, `contacted`, `resolved`, `archived`.
    pub status: Option<String>,
}

/// Handles sending, listing and triaging enquiries.
#[derive(Debug, Clone)]
pub struct EnquiryService {
    /// Enquiry store.
    enquiries: Arc<dyn EnquiryStore>,
    /// Listing store, for recipients and ownership.
    properties: Arc<dyn PropertyStore>,
    /// User store, for populating summaries.
    users: Arc<dyn UserStore>,
    /// Property owner check.
    guard: OwnershipGuard,
}

impl EnquiryService {
    /// Creates a new enquiry service.
    pub fn new(stores: &Stores, guard: OwnershipGuard) -> Self {
        Self {
            enquiries: stores.enquiries.clone(),
            properties: stores.properties.clone(),
            users: stores.users.clone(),
            guard,
        }
    }

    /// Send an enquiry about a listing to its owner.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: EnquiryInput,
    ) -> Result<EnquiryDetails, AppError> {
        let raw_id = require_text("propertyId", input.property_id.as_deref())?;
        let property_id = PropertyId::parse_param(raw_id, "property")?;
        let message = require_text("message", input.message.as_deref())?.to_string();
        validate(&input)?;

        let property = self
            .properties
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))?;

        let enquiry = self
            .enquiries
            .create(&CreateEnquiry {
                sender_id: ctx.user_id,
                recipient_id: property.owner_id,
                property_id,
                message,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            property_id = %property_id,
            enquiry_id = %enquiry.id,
            "Enquiry sent"
        );
        self.details(enquiry).await
    }

    /// Enquiries addressed to the caller, newest first.
    pub async fn list_received(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<EnquiryDetails>, AppError> {
        let received = self.enquiries.find_by_recipient(ctx.user_id).await?;
        let mut out = Vec::with_capacity(received.len());
        for enquiry in received {
            out.push(self.details(enquiry).await?);
        }
        Ok(out)
    }

    /// Change the status of an enquiry about one of the caller's listings.
    ///
    /// Checks run in order: status value, enquiry existence, ownership of
    /// the referenced listing.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: EnquiryId,
        input: StatusInput,
    ) -> Result<EnquiryDetails, AppError> {
        let status: EnquiryStatus = input
            .status
            .as_deref()
            .ok_or_else(|| AppError::validation("Invalid status"))?
            .parse()?;

        let enquiry = self
            .enquiries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Enquiry not found"))?;

        let Some(property) = self.properties.find_by_id(enquiry.property_id).await? else {
            return Err(AppError::authorization(
                "Unauthorized: Not the property owner",
            ));
        };
        self.guard
            .check(&property, &ctx.caller(), OwnershipAction::ManageEnquiries)?;

        let updated = self
            .enquiries
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Enquiry not found"))?;

        info!(
            user_id = %ctx.user_id,
            enquiry_id = %id,
            status = %status,
            "Enquiry status updated"
        );
        self.details(updated).await
    }

    async fn details(&self, enquiry: Enquiry) -> Result<EnquiryDetails, AppError> {
        let sender = self.users.find_by_id(enquiry.sender_id).await?;
        let recipient = self.users.find_by_id(enquiry.recipient_id).await?;
        let property = self.properties.find_by_id(enquiry.property_id).await?;
        Ok(EnquiryDetails {
            sender: sender.map(|u| u.summary()),
            recipient: recipient.map(|u| u.summary()),
            property: property.map(|p| p.summary()),
            enquiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estatehub_core::error::ErrorKind;
    use estatehub_entity::property::{
        Address, CreateProperty, ListingStatus, PropertyFeatures, PropertyType, Province,
    };
    use estatehub_entity::user::{CreateUser, UserRole};

    async fn account(stores: &Stores, email: &str, role: UserRole) -> RequestContext {
        let user = stores
            .users
            .create(&CreateUser {
                name: "Someone".into(),
                email: email.into(),
                password_hash: "hash".into(),
                role,
            })
            .await
            .unwrap();
        RequestContext::new(user.id, user.email, user.role)
    }

    async fn listing(stores: &Stores, owner: &RequestContext) -> PropertyId {
        stores
            .properties
            .create(&CreateProperty {
                title: "Bushveld lodge".into(),
                description: "Game farm lodge".into(),
                price: 12_000_000.0,
                location: "Hoedspruit".into(),
                address: Address {
                    street: None,
                    city: "Hoedspruit".into(),
                    province: Province::Limpopo,
                    postal_code: None,
                    country: "South Africa".into(),
                },
                property_type: PropertyType::Farm,
                features: PropertyFeatures::default(),
                images: vec!["https://img.example/lodge.jpg".into()],
                status: ListingStatus::ForSale,
                owner_id: owner.user_id,
            })
            .await
            .unwrap()
            .id
    }

    fn status(value: &str) -> StatusInput {
        StatusInput {
            status: Some(value.into()),
        }
    }

    #[tokio::test]
    async fn test_send_and_triage() {
        let stores = Stores::memory();
        let service = EnquiryService::new(&stores, OwnershipGuard::default());
        let owner = account(&stores, "owner@example.com", UserRole::User).await;
        let buyer = account(&stores, "buyer@example.com", UserRole::User).await;
        let property_id = listing(&stores, &owner).await;

        let sent = service
            .create(
                &buyer,
                EnquiryInput {
                    property_id: Some(property_id.to_string()),
                    message: Some("Is the price negotiable?".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(sent.enquiry.recipient_id, owner.user_id);
        assert_eq!(sent.enquiry.status, EnquiryStatus::Pending);

        let inbox = service.list_received(&owner).await.unwrap();
        assert_eq!(inbox.len(), 1);

        let updated = service
            .update_status(&owner, sent.enquiry.id, status("contacted"))
            .await
            .unwrap();
        assert_eq!(updated.enquiry.status, EnquiryStatus::Contacted);
        assert_eq!(updated.sender.unwrap().email, "buyer@example.com");
        assert_eq!(updated.property.unwrap().title, "Bushveld lodge");
    }

    #[tokio::test]
    async fn test_status_checks_in_order() {
        let stores = Stores::memory();
        let service = EnquiryService::new(&stores, OwnershipGuard::default());
        let owner = account(&stores, "owner@example.com", UserRole::User).await;
        let buyer = account(&stores, "buyer@example.com", UserRole::User).await;
        let admin = account(&stores, "admin@example.com", UserRole::Admin).await;
        let property_id = listing(&stores, &owner).await;
        let sent = service
            .create(
                &buyer,
                EnquiryInput {
                    property_id: Some(property_id.to_string()),
                    message: Some("Hello".into()),
                },
            )
            .await
            .unwrap();

        let err = service
            .update_status(&owner, EnquiryId::new(), status("closed"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid status");

        let err = service
            .update_status(&owner, EnquiryId::new(), status("resolved"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        for ctx in [&buyer, &admin] {
            let err = service
                .update_status(ctx, sent.enquiry.id, status("archived"))
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Authorization);
            assert_eq!(err.message, "Unauthorized: Not the property owner");
        }
    }

    #[tokio::test]
    async fn test_create_requires_known_property() {
        let stores = Stores::memory();
        let service = EnquiryService::new(&stores, OwnershipGuard::default());
        let buyer = account(&stores, "buyer@example.com", UserRole::User).await;

        let err = service
            .create(
                &buyer,
                EnquiryInput {
                    property_id: Some("not-a-uuid".into()),
                    message: Some("Hi".into()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid property ID");

        let err = service
            .create(
                &buyer,
                EnquiryInput {
                    property_id: Some(PropertyId::new().to_string()),
                    message: Some("Hi".into()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{MICROSOFT_CUSTOMER_AGREEMENT_TYPE, MICROSOFT_PUBLISHER_ID};
use crate::error::AppError;
use crate::model::params::require_non_empty;
use chrono::Utc;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Customer tenant type T1
pub const TENANT_TYPE_T1: i32 = 1;
/// Customer tenant type T2
pub const TENANT_TYPE_T2: i32 = 2;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Reference to another resource by id and name
pub struct ObjectReference {
    /// Resource id
    pub id: i64,
    /// Resource name
    pub name: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Organization owning a tenant
pub struct OrganizationReference {
    /// Organization id
    pub id: i64,
    /// Organization name
    pub name: Option<String>,
    /// Parent organization id, 0 for none
    pub parent_id: i64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Tenant section of a tenant creation request
pub struct CustomerTenant {
    /// Display name of the tenant
    pub name: String,
    /// Publisher of the tenant (Microsoft)
    pub publisher: ObjectReference,
    /// Prefix of the `onmicrosoft.com` domain
    pub domain_prefix: String,
    /// Owning organization
    pub organization: OrganizationReference,
    /// Invoice profile billed for the tenant
    pub invoice_profile: ObjectReference,
    /// Tenant type, see [`TENANT_TYPE_T1`] and [`TENANT_TYPE_T2`]
    pub customer_tenant_type: i32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Contact person of a tenant
pub struct Contact {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// E-mail address
    pub email: String,
    /// Phone number
    pub phone_number: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Postal address of a tenant
pub struct Address {
    /// First name of the addressee
    pub first_name: String,
    /// Last name of the addressee
    pub last_name: String,
    /// Street and number
    pub address_line1: String,
    /// City
    pub city: String,
    /// ISO country code
    pub country_code: String,
    /// Country name, resolved by the API when omitted
    pub country_name: Option<String>,
    /// Region or state
    pub region: String,
    /// Postal code
    pub postal_code: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Contact and address of a tenant
pub struct TenantProfile {
    /// Contact person
    pub contact: Contact,
    /// Postal address
    pub address: Address,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
/// Company details of a tenant
pub struct Company {
    /// Registration number of the organization
    pub organization_registration_number: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
/// Initial admin user of a tenant
pub struct TenantUser {
    /// Requested admin username; generated by the API when omitted
    pub user_name: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
/// Body of `POST /CustomerTenants`
pub struct CustomerTenantDetailed {
    /// Tenant details
    pub tenant: CustomerTenant,
    /// Contact and address
    pub profile: TenantProfile,
    /// Company details
    pub company: Company,
    /// Initial admin user
    pub user: TenantUser,
}

impl CustomerTenantDetailed {
    /// Creates a T1 Microsoft tenant request billed to the "Default" invoice profile
    pub fn new(
        tenant_name: impl Into<String>,
        domain_prefix: impl Into<String>,
        org_id: i64,
        invoice_profile_id: i64,
        contact: Contact,
        address: Address,
    ) -> Self {
        Self {
            tenant: CustomerTenant {
                name: tenant_name.into(),
                publisher: ObjectReference {
                    id: MICROSOFT_PUBLISHER_ID,
                    name: Some("Microsoft".to_string()),
                },
                domain_prefix: domain_prefix.into(),
                organization: OrganizationReference {
                    id: org_id,
                    name: None,
                    parent_id: 0,
                },
                invoice_profile: ObjectReference {
                    id: invoice_profile_id,
                    name: Some("Default".to_string()),
                },
                customer_tenant_type: TENANT_TYPE_T1,
            },
            profile: TenantProfile { contact, address },
            company: Company::default(),
            user: TenantUser::default(),
        }
    }

    /// Sets the organization name
    #[must_use]
    pub fn with_org_name(mut self, name: impl Into<String>) -> Self {
        self.tenant.organization.name = Some(name.into());
        self
    }

    /// Sets the invoice profile name
    #[must_use]
    pub fn with_invoice_profile_name(mut self, name: impl Into<String>) -> Self {
        self.tenant.invoice_profile.name = Some(name.into());
        self
    }

    /// Sets the tenant type
    #[must_use]
    pub fn with_tenant_type(mut self, tenant_type: i32) -> Self {
        self.tenant.customer_tenant_type = tenant_type;
        self
    }

    /// Sets the admin username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.user.user_name = Some(username.into());
        self
    }

    /// Sets the organization registration number
    #[must_use]
    pub fn with_org_registration_number(mut self, number: impl Into<String>) -> Self {
        self.company.organization_registration_number = Some(number.into());
        self
    }

    /// Checks the fields the API requires
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("tenant name", &self.tenant.name)?;
        require_non_empty("domain prefix", &self.tenant.domain_prefix)?;
        require_non_empty("contact email", &self.profile.contact.email)?;
        require_non_empty("country code", &self.profile.address.country_code)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /customertenants/{id}/agreements`
///
/// Records acceptance of the Microsoft Customer Agreement for a tenant.
pub struct CustomerTenantAgreement {
    /// First name of the person accepting
    pub first_name: String,
    /// Last name of the person accepting
    pub last_name: String,
    /// Phone number of the person accepting
    pub phone_number: String,
    /// E-mail of the person accepting
    pub email: String,
    /// Acceptance timestamp, `YYYY-MM-DDTHH:MM:SS`
    pub date_agreed: String,
    /// Agreement type
    pub agreement_type: i32,
}

impl CustomerTenantAgreement {
    /// Creates a Microsoft Customer Agreement accepted now
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            date_agreed: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            agreement_type: MICROSOFT_CUSTOMER_AGREEMENT_TYPE,
        }
    }

    /// Checks the fields the API requires
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("first name", &self.first_name)?;
        require_non_empty("last name", &self.last_name)?;
        require_non_empty("email", &self.email)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Reference to a customer tenant by id
pub struct TenantReference {
    /// Tenant id
    pub id: i64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Reference to a product by part number
pub struct ProductReference {
    /// Part number (SKU)
    pub part_number: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /Subscriptions`
pub struct SubscriptionDetailed {
    /// Display name of the subscription
    pub name: String,
    /// Tenant that receives the subscription
    pub customer_tenant: TenantReference,
    /// Product to license
    pub product: ProductReference,
    /// Number of licenses
    pub quantity: u32,
    /// Billing cycle id (1 = monthly, 2 = annual)
    pub billing_cycle: i32,
    /// ISO 8601 term duration, e.g. `P1M`, `P1Y`
    pub term_duration: String,
}

impl SubscriptionDetailed {
    /// Creates a subscription request
    pub fn new(
        name: impl Into<String>,
        tenant_id: i64,
        part_number: impl Into<String>,
        quantity: u32,
        billing_cycle: i32,
        term_duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            customer_tenant: TenantReference { id: tenant_id },
            product: ProductReference {
                part_number: part_number.into(),
            },
            quantity,
            billing_cycle,
            term_duration: term_duration.into(),
        }
    }

    /// Checks the fields the API requires
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("subscription name", &self.name)?;
        require_non_empty("part number", &self.product.part_number)?;
        if self.quantity == 0 {
            return Err(AppError::InvalidInput(
                "quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

use assert_json_diff::{assert_json_eq, assert_json_include};
use cloudiq_client::model::requests::{
    Address, Contact, CustomerTenantAgreement, CustomerTenantDetailed, SubscriptionDetailed,
    TENANT_TYPE_T2,
};
use serde_json::json;

fn contact() -> Contact {
    Contact {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "it@contoso.com".to_string(),
        phone_number: "5555555555".to_string(),
    }
}

fn address() -> Address {
    Address {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        address_line1: "1 Main Street".to_string(),
        city: "Oslo".to_string(),
        country_code: "NO".to_string(),
        country_name: Some("Norway".to_string()),
        region: "Oslo".to_string(),
        postal_code: "0150".to_string(),
    }
}

#[test]
fn test_customer_tenant_builders() {
    let tenant = CustomerTenantDetailed::new("Contoso", "contoso", 123456, 80408, contact(), address())
        .with_org_name("Contoso Group")
        .with_invoice_profile_name("Invoices")
        .with_tenant_type(TENANT_TYPE_T2)
        .with_username("admin")
        .with_org_registration_number("NO123");

    assert_json_include!(
        actual: serde_json::to_value(&tenant).unwrap(),
        expected: json!({
            "Tenant": {
                "Organization": {"Id": 123456, "Name": "Contoso Group"},
                "InvoiceProfile": {"Id": 80408, "Name": "Invoices"},
                "CustomerTenantType": 2
            },
            "Profile": {"Address": {"CountryName": "Norway"}},
            "Company": {"OrganizationRegistrationNumber": "NO123"},
            "User": {"UserName": "admin"}
        })
    );
}

#[test]
fn test_customer_tenant_roundtrips_through_json() {
    let tenant = CustomerTenantDetailed::new("Contoso", "contoso", 1, 2, contact(), address());
    let value = serde_json::to_value(&tenant).unwrap();
    let parsed: CustomerTenantDetailed = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, tenant);
}

#[test]
fn test_agreement_payload() {
    let agreement = CustomerTenantAgreement::new("Ada", "Lovelace", "5555555555", "it@contoso.com");
    assert_json_include!(
        actual: serde_json::to_value(&agreement).unwrap(),
        expected: json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "it@contoso.com",
            "agreementType": 1
        })
    );
    assert!(agreement.validate().is_ok());
    assert!(
        CustomerTenantAgreement::new("Ada", "Lovelace", "", "")
            .validate()
            .is_err()
    );
}

#[test]
fn test_subscription_payload() {
    let subscription = SubscriptionDetailed::new("Azure plan", 555, "DZH318Z0BPS6:0001", 1, 1, "P1M");
    assert_json_eq!(
        serde_json::to_value(&subscription).unwrap(),
        json!({
            "name": "Azure plan",
            "customerTenant": {"id": 555},
            "product": {"partNumber": "DZH318Z0BPS6:0001"},
            "quantity": 1,
            "billingCycle": 1,
            "termDuration": "P1M"
        })
    );
}

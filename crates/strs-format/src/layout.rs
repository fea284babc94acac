//! STRS annual reporting record layout

use crate::descriptor::{FieldDescriptor, LogicalType};
use crate::padding::{PadPolicy, TrimPolicy};

/// Width of one STRS DAT record in bytes
pub const STRS_RECORD_WIDTH: usize = 350;

/// Descriptors of the STRS record, in record order
#[must_use]
pub fn strs_fields() -> Vec<FieldDescriptor> {
    use LogicalType::{Alphanumeric, FixedPointDecimal, Integer, Reserved, Year};

    let exact = |field: FieldDescriptor| {
        field
            .with_trim(TrimPolicy::Fail)
            .with_pad(PadPolicy::Fail)
    };

    vec![
        FieldDescriptor::new("EmployeeID", 1, 4, Alphanumeric),
        FieldDescriptor::new("TaxedMemberContribution", 5, 8, FixedPointDecimal),
        FieldDescriptor::new("ReportFiscalYear", 13, 4, Year),
        FieldDescriptor::new("ServiceCredit", 17, 3, FixedPointDecimal),
        exact(FieldDescriptor::new("MembershipTypeCode", 20, 1, Alphanumeric)),
        exact(FieldDescriptor::new("SocialSecurityNumber", 21, 9, Integer)),
        FieldDescriptor::new("NameOfEmployee", 30, 30, Alphanumeric),
        FieldDescriptor::new("TaxDeferredMemberContribution", 60, 8, FixedPointDecimal),
        FieldDescriptor::new("DeliveryAddressLine1", 68, 40, Alphanumeric),
        FieldDescriptor::new("DeliveryAddressLine2", 108, 40, Alphanumeric),
        FieldDescriptor::new("DeliveryAddressLine3", 148, 40, Alphanumeric),
        FieldDescriptor::new("CityName", 188, 20, Alphanumeric),
        FieldDescriptor::new("StateCode", 208, 2, Alphanumeric),
        FieldDescriptor::new("ZipCode", 210, 5, Integer),
        FieldDescriptor::new("ZipCodeSuffix", 215, 4, Integer),
        FieldDescriptor::new("ZipCodeDeliveryPoint", 219, 2, Integer),
        FieldDescriptor::new("AccruedContributionAmount", 221, 8, FixedPointDecimal),
        FieldDescriptor::new("EmailAddress", 229, 50, Alphanumeric),
        exact(FieldDescriptor::new("PhoneNumber", 279, 10, Integer)),
        exact(FieldDescriptor::new("PhoneNumberType", 289, 1, Alphanumeric)),
        FieldDescriptor::new("Reserved", 290, 61, Reserved),
    ]
}

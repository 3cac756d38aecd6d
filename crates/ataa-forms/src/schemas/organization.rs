// File: src/schemas/organization.rs
// Purpose: Schema for the organization applicant form

use crate::config::Limits;
use crate::schema::{
    all, email, expiry_date, max_len, min_len, positive, positive_count, required, saudi_iban,
    saudi_phone, upload, url, Schema,
};
use ataa_validation::FileRules;
use once_cell::sync::Lazy;

/// Organization applicant schema built from the given limits.
///
/// Unlike the individual form, the contact email is required here:
/// licensed organizations correspond over email, individuals often
/// have none.
pub fn organization_schema(limits: &Limits) -> Schema {
    let attachment = FileRules {
        required: true,
        max_size_mb: limits.max_file_mb,
        allowed_types: limits.allowed_file_types.clone(),
    };

    Schema::new("organization")
        .field(
            "org_name",
            all(vec![
                required("اسم الجهة"),
                min_len(limits.name_min_len, "اسم الجهة"),
                max_len(150, "اسم الجهة"),
            ]),
        )
        .field("license_number", required("رقم الترخيص"))
        .field(
            "license_expiry",
            all(vec![required("تاريخ انتهاء الترخيص"), expiry_date()]),
        )
        .field("ministry", required("الجهة المشرفة"))
        .field("email", all(vec![required("البريد الإلكتروني"), email()]))
        .field("phone", all(vec![required("رقم الجوال"), saudi_phone()]))
        .field("website", url())
        .field("city", required("المدينة"))
        .field("address", required("العنوان"))
        .field(
            "contact_name",
            all(vec![
                required("اسم مسؤول التواصل"),
                min_len(limits.name_min_len, "اسم مسؤول التواصل"),
            ]),
        )
        .field(
            "contact_phone",
            all(vec![required("جوال مسؤول التواصل"), saudi_phone()]),
        )
        .field(
            "project_name",
            all(vec![required("اسم المشروع"), min_len(3, "اسم المشروع")]),
        )
        .field(
            "project_summary",
            all(vec![
                required("ملخص المشروع"),
                min_len(limits.description_min_len, "ملخص المشروع"),
                max_len(limits.description_max_len, "ملخص المشروع"),
            ]),
        )
        .field(
            "project_budget",
            all(vec![
                required("ميزانية المشروع"),
                positive("ميزانية المشروع"),
            ]),
        )
        .field(
            "beneficiary_count",
            all(vec![
                required("عدد المستفيدين"),
                positive_count("عدد المستفيدين"),
            ]),
        )
        .field("bank_name", required("اسم البنك"))
        .field("iban", all(vec![required("رقم الآيبان"), saudi_iban()]))
        .field("license_copy", upload("صورة الترخيص", attachment.clone()))
        .field("bank_letter", upload("خطاب البنك", attachment))
}

/// Registry built once at startup with the default limits
pub static ORGANIZATION_SCHEMA: Lazy<Schema> =
    Lazy::new(|| organization_schema(&Limits::default()));

// File: src/schemas/individual.rs
// Purpose: Schema for the individual applicant form

use crate::config::Limits;
use crate::schema::{
    all, birth_date, email, max_len, min_len, national_id, positive, positive_count, required,
    saudi_iban, saudi_phone, upload, when_field_equals, Schema,
};
use ataa_validation::FileRules;
use once_cell::sync::Lazy;

/// Individual applicant schema built from the given limits.
///
/// Selects (`housing`, `married`, `income_source`, ...) are validated
/// for presence only; the allowed options live in the select widgets.
/// The `*_other` free-text fields are checked only while their
/// governing select reads "other", and `family_count` only for
/// married applicants.
pub fn individual_schema(limits: &Limits) -> Schema {
    let attachment = FileRules {
        required: true,
        max_size_mb: limits.max_file_mb,
        allowed_types: limits.allowed_file_types.clone(),
    };

    Schema::new("individual")
        .field(
            "name",
            all(vec![
                required("الاسم"),
                min_len(limits.name_min_len, "الاسم"),
                max_len(100, "الاسم"),
            ]),
        )
        .field(
            "national_id",
            all(vec![required("رقم الهوية"), national_id()]),
        )
        .field(
            "birth_date",
            all(vec![required("تاريخ الميلاد"), birth_date(limits.min_age)]),
        )
        .field("phone", all(vec![required("رقم الجوال"), saudi_phone()]))
        .field("email", email())
        .field("city", required("المدينة"))
        .field("district", required("الحي"))
        .field("housing", required("نوع السكن"))
        .field(
            "housing_other",
            when_field_equals(
                "housing",
                "other",
                all(vec![
                    required("نوع السكن الآخر"),
                    min_len(3, "نوع السكن الآخر"),
                ]),
            ),
        )
        .field("married", required("الحالة الاجتماعية"))
        .field(
            "family_count",
            when_field_equals(
                "married",
                "yes",
                all(vec![
                    required("عدد أفراد الأسرة"),
                    positive_count("عدد أفراد الأسرة"),
                ]),
            ),
        )
        .field(
            "income",
            all(vec![required("الدخل الشهري"), positive("الدخل الشهري")]),
        )
        .field("income_source", required("مصدر الدخل"))
        .field(
            "income_source_other",
            when_field_equals(
                "income_source",
                "other",
                all(vec![
                    required("مصدر الدخل الآخر"),
                    min_len(3, "مصدر الدخل الآخر"),
                ]),
            ),
        )
        .field("employment", required("الحالة الوظيفية"))
        .field("iban", all(vec![required("رقم الآيبان"), saudi_iban()]))
        .field("bank_name", required("اسم البنك"))
        .field("need_type", required("نوع الاحتياج"))
        .field(
            "need_description",
            all(vec![
                required("وصف الاحتياج"),
                min_len(limits.description_min_len, "وصف الاحتياج"),
                max_len(limits.description_max_len, "وصف الاحتياج"),
            ]),
        )
        .field("id_copy", upload("صورة الهوية", attachment.clone()))
        .field("iban_certificate", upload("شهادة الآيبان", attachment))
}

/// Registry built once at startup with the default limits
pub static INDIVIDUAL_SCHEMA: Lazy<Schema> =
    Lazy::new(|| individual_schema(&Limits::default()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_coverage() {
        let schema = &*INDIVIDUAL_SCHEMA;
        assert_eq!(schema.name(), "individual");
        assert_eq!(schema.len(), 21);
        for field in [
            "name",
            "national_id",
            "birth_date",
            "phone",
            "housing_other",
            "family_count",
            "iban",
            "id_copy",
        ] {
            assert!(schema.contains(field), "missing field {field}");
        }
    }
}

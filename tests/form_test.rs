mod utils;

#[cfg(test)]
mod tests {
    use crate::utils::create_test_man;
    use chrono::NaiveDate;
    use famille::form::{
        PersonFormData, RelationIds, convert_date_format, parse_form_date, validate_person_form,
    };
    use famille::{FamilleError, Person};

    fn create_valid_form() -> PersonFormData {
        PersonFormData {
            first_name: "Jean".to_string(),
            last_name: "Dupont".to_string(),
            gender: "Homme".to_string(),
            birth_date: "02/03/1980".to_string(),
            ..PersonFormData::default()
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let result = validate_person_form(&PersonFormData::default());

        assert!(!result.is_valid());
        assert_eq!(
            result.errors,
            vec![
                "Le prénom est requis",
                "Le nom est requis",
                "Le genre est requis",
                "La date de naissance est requise",
            ]
        );
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let mut form = create_valid_form();
        form.first_name = "   ".to_string();

        let result = validate_person_form(&form);

        assert_eq!(result.errors, vec!["Le prénom est requis"]);
    }

    #[test]
    fn test_invalid_birth_date() {
        let mut form = create_valid_form();
        form.birth_date = "32/13/1980".to_string();

        let result = validate_person_form(&form);

        assert_eq!(result.errors, vec!["Format de date invalide"]);
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_person_form(&create_valid_form()).is_valid());
    }

    #[test]
    fn test_date_conversion() {
        assert_eq!(convert_date_format("02/03/1980"), "1980-03-02");
        assert_eq!(
            parse_form_date("02/03/1980"),
            NaiveDate::from_ymd_opt(1980, 3, 2)
        );
        assert_eq!(parse_form_date("1980-03-02"), NaiveDate::from_ymd_opt(1980, 3, 2));
        assert_eq!(parse_form_date(""), None);
    }

    #[test]
    fn test_form_from_new_person_is_blank() {
        assert_eq!(PersonFormData::from_person(None), PersonFormData::default());
    }

    #[test]
    fn test_form_from_existing_person() {
        let mut person: Person = create_test_man(3, "Pierre", "Dupont", Some(45))
            .with_father(1)
            .with_conjoint(4)
            .with_birth_date(NaiveDate::from_ymd_opt(1979, 5, 17).unwrap());
        person.birth_place = Some("Lyon".to_string());

        let form = PersonFormData::from_person(Some(&person));

        assert_eq!(form.gender, "Homme");
        assert_eq!(form.birth_date, "1979-05-17");
        assert_eq!(form.birth_place, "Lyon");
        assert_eq!(form.father, "1");
        assert_eq!(form.mother, "");
        assert_eq!(form.conjoint, "4");
        assert_eq!(
            form.parse_relation_ids().unwrap(),
            RelationIds {
                father_id: Some(1),
                mother_id: None,
                conjoint_id: Some(4),
            }
        );
    }

    #[test]
    fn test_non_numeric_relation_is_rejected() {
        let mut form = create_valid_form();
        form.mother = "abc".to_string();

        let err = form.parse_relation_ids().unwrap_err();

        assert!(matches!(err, FamilleError::InvalidField { field: "motherId", .. }));
    }

    #[test]
    fn test_submission_fields() {
        let mut form = create_valid_form();
        form.father = "1".to_string();
        form.date_deces = "01/01/2020".to_string();

        let fields = form.submission_fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();

        assert_eq!(
            names,
            vec![
                "first_name",
                "last_name",
                "gender",
                "birth_place",
                "notes",
                "birth_date",
                "fatherId",
                "dateDeces",
            ]
        );
        assert!(fields.contains(&("birth_date", "1980-03-02".to_string())));
        assert!(fields.contains(&("dateDeces", "2020-01-01".to_string())));
    }
}

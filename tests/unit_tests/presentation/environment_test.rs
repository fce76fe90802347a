use dispatch_advisor::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_accepts_aliases() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_environment_then_errors() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

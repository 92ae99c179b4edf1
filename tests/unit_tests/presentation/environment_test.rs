use quizgen::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_to_environment() {
    assert_eq!(Environment::try_from("Production".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from(" test ".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_displaying_then_uses_overlay_name() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::Local.as_str(), "local");
}

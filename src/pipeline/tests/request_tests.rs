extern crate std;

use std::path::Path;

use crate::pipeline::request::RunRequest;
use crate::plan::errors::PlanError;

#[test]
fn test_constructors_select_artifacts() {
    let tiles = RunRequest::tiles("plan.png");
    std::assert!(tiles.tiles && !tiles.wants_features());

    let points = RunRequest::points("marked.png");
    std::assert!(points.points && !points.polygons && !points.tiles);

    let all = RunRequest::pipeline("plan.png", Some("marked.png"));
    std::assert!(all.tiles && all.points && all.polygons);
    std::assert!(all.validate().is_ok());
}

#[test]
fn test_features_fall_back_to_input() {
    let request = RunRequest::pipeline("plan.png", None::<&str>);
    std::assert_eq!(request.feature_source(), Some(Path::new("plan.png")));

    let request = RunRequest::pipeline("plan.png", Some("marked.png"));
    std::assert_eq!(request.feature_source(), Some(Path::new("marked.png")));
}

#[test]
fn test_empty_request_is_rejected() {
    let result = RunRequest::default().validate();
    std::assert!(std::matches!(result, Err(PlanError::InvalidConfig(_))));
}

#[test]
fn test_tiles_without_input_is_rejected() {
    let request = RunRequest { tiles: true, ..Default::default() };
    std::assert!(std::matches!(request.validate(), Err(PlanError::InvalidConfig(_))));
}

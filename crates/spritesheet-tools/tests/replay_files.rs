//! Replay from files on disk.

use spritesheet_common::{AnimationId, FrameId};
use spritesheet_state::selectors;
use spritesheet_tools::replay::{replay, ActionLog, ReplayError};
use spritesheet_tools::ToolsConfig;
use std::fs;
use tempfile::TempDir;

const WALK_CYCLE: &str = r#"{"type":"ADD_FILE","fileName":"legs.png","id":0}
{"type":"ADD_FILE","fileName":"torso.png","id":1}
{"type":"ADD_ANIMATION","animationName":"Walk","id":0}
{"type":"ADD_FRAME_TO_ANIMATION","animation":0,"id":0}
{"type":"SET_DURATION_FOR_FRAME","frame":0,"duration":120}
{"type":"ADD_FRAME_TO_ANIMATION","animation":0,"id":1}
{"type":"SET_DURATION_FOR_FRAME","frame":1,"duration":120}
{"type":"SELECT_FILE","file":0}
{"type":"SET_TOP_FOR_SELECTED_FILE_FRAME","top":-2}
{"type":"DELETE_FRAME","id":0}
"#;

#[test]
fn test_replay_log_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("walk.jsonl");
    fs::write(&path, WALK_CYCLE).expect("write log");

    let log = ActionLog::load(&path).expect("load");
    let config = ToolsConfig::default();
    let outcome = replay(&log, config.initial_state(), true);

    assert!(outcome.is_clean());
    assert_eq!(outcome.applied, 10);

    let state = &outcome.state;
    assert_eq!(state.selected_frame(), Some(FrameId::new(1)));
    assert_eq!(
        state.animation(AnimationId::new(0)).map(|a| a.frames.clone()),
        Some(vec![FrameId::new(1)])
    );
    assert_eq!(selectors::animation_duration(state, AnimationId::new(0)), Some(120));
    assert_eq!(selectors::selected_file_frame(state).map(|ff| ff.top), Some(-2));
}

#[test]
fn test_missing_log_file() {
    let err = ActionLog::load("/nonexistent/walk.jsonl").unwrap_err();
    assert!(matches!(err, ReplayError::Io(_)));
}

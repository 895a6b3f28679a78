use tilescene::input::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Action {
    Quit,
    Confirm,
}

#[test]
fn press_marks_held_and_pressed() {
    let mut input = InputState::new();
    input.press(KeyCode::Escape);
    assert!(input.is_key_held(KeyCode::Escape));
    assert!(input.is_key_pressed(KeyCode::Escape));

    input.clear_frame_state();
    assert!(input.is_key_held(KeyCode::Escape));
    assert!(!input.is_key_pressed(KeyCode::Escape));
}

#[test]
fn repeat_press_is_not_a_new_press() {
    let mut input = InputState::new();
    input.press(KeyCode::Digit1);
    input.clear_frame_state();
    input.press(KeyCode::Digit1);
    assert!(!input.is_key_pressed(KeyCode::Digit1));
}

#[test]
fn release_clears_held() {
    let mut input = InputState::new();
    input.press(KeyCode::Enter);
    input.release(KeyCode::Enter);
    assert!(!input.is_key_held(KeyCode::Enter));
    assert!(input.is_key_released(KeyCode::Enter));
}

#[test]
fn action_map_binds_multiple_keys() {
    let map = ActionMap::new()
        .with(Action::Confirm, KeyCode::Enter)
        .with(Action::Confirm, KeyCode::Space)
        .with(Action::Quit, KeyCode::Escape);

    let mut input = InputState::new();
    input.press(KeyCode::Space);
    assert!(map.is_pressed(Action::Confirm, &input));
    assert!(!map.is_pressed(Action::Quit, &input));
    assert!(map.is_held(Action::Confirm, &input));
}

#[test]
fn held_action_outlives_the_press_frame() {
    let map = ActionMap::new().with(Action::Quit, KeyCode::Escape);
    let mut input = InputState::new();
    input.press(KeyCode::Escape);
    input.clear_frame_state();
    assert!(!map.is_pressed(Action::Quit, &input));
    assert!(map.is_held(Action::Quit, &input));
}

#[test]
fn first_pressed_respects_order() {
    let map = ActionMap::new()
        .with(Action::Quit, KeyCode::Escape)
        .with(Action::Confirm, KeyCode::Enter);
    let mut input = InputState::new();
    input.press(KeyCode::Enter);
    input.press(KeyCode::Escape);
    assert_eq!(map.first_pressed(&[Action::Quit, Action::Confirm], &input), Some(Action::Quit));
    assert_eq!(map.first_pressed(&[Action::Confirm, Action::Quit], &input), Some(Action::Confirm));
    assert_eq!(map.first_pressed(&[], &input), None);
}

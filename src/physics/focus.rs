//! Camera focus cursor over the registry order

use crate::physics::body::Body;

/// Index of the focused body, if any
pub fn focused_index(bodies: &[Body]) -> Option<usize> {
    bodies.iter().position(|body| body.camera_focus)
}

/// Moves focus to the next body in registry order, wrapping at the end.
///
/// With no focused body the first body takes focus. An empty slice is left
/// untouched.
pub fn cycle_focus(bodies: &mut [Body]) {
    if bodies.is_empty() {
        return;
    }

    let next = match focused_index(bodies) {
        Some(index) => {
            bodies[index].camera_focus = false;
            (index + 1) % bodies.len()
        }
        None => 0,
    };

    bodies[next].camera_focus = true;
}

/// Gives focus to `index` and takes it from every other body
pub fn focus_only(bodies: &mut [Body], index: usize) {
    for (i, body) in bodies.iter_mut().enumerate() {
        body.camera_focus = i == index;
    }
}

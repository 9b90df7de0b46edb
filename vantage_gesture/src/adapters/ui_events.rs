// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for `ui-events` pointer streams.
//!
//! ## Feature
//!
//! Enable with `ui_events_adapter`.
//!
//! ## Notes
//!
//! W3C-style pointer streams deliver one event per pointer, while the
//! recognizer consumes contact-list events (every active touch per event).
//! [`PointerEventAdapter`] bridges the two: it tracks which touch pointers
//! are currently down, assigns each a stable [`TouchId`] for the lifetime of
//! the contact, and emits the corresponding [`PointerInput`] values into a
//! recognizer. Mouse and pen pointers pass through as single-pointer events.
//!
//! Scroll deltas are resolved to pixel units here (pixel deltas at the
//! event's logical scale; line and page deltas against a nominal line height
//! and the recognizer's view size, respectively) so the recognizer only ever
//! sees pixels.
//!
//! [`TouchId`]: crate::TouchId

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use ui_events::pointer::{PointerEvent, PointerGesture, PointerId, PointerScrollEvent, PointerType};

use vantage_transform::TransformModel;

use crate::input::{Contact, Modifiers, PointerInput, TouchId};
use crate::recognizer::GestureRecognizer;

/// Pixel height of one scroll "line", used to resolve line-based deltas.
const LINE_SIZE: f64 = 20.0;

/// Correlates per-pointer `ui-events` streams into recognizer input.
///
/// One adapter serves one recognizer/surface pair. Feed every pointer event
/// the surface receives through [`PointerEventAdapter::handle_pointer`]:
///
/// ```rust
/// use vantage_gesture::adapters::ui_events::PointerEventAdapter;
/// use vantage_gesture::{GestureConfig, GestureRecognizer};
/// use vantage_transform::TransformModel;
///
/// let mut model = TransformModel::new();
/// let mut recognizer = GestureRecognizer::new(GestureConfig::default()).unwrap();
/// let mut adapter = PointerEventAdapter::new();
/// // for each ui_events::pointer::PointerEvent `event` from the host:
/// //     adapter.handle_pointer(&event, &mut recognizer, &mut model);
/// ```
#[derive(Debug, Default)]
pub struct PointerEventAdapter {
    /// Touch contacts currently down, in arrival order.
    contacts: Vec<TrackedContact>,
    next_touch_id: u64,
}

#[derive(Clone, Copy, Debug)]
struct TrackedContact {
    pointer: PointerId,
    contact: Contact,
}

impl PointerEventAdapter {
    /// Creates an adapter with no tracked contacts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates one pointer event and feeds the result to `recognizer`.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        recognizer: &mut GestureRecognizer,
        model: &mut TransformModel,
    ) {
        match event {
            PointerEvent::Down(e) => {
                let position = e.state.logical_point();
                let modifiers = modifiers(&e.state.modifiers);
                match touch_pointer(e.pointer.pointer_type, e.pointer.pointer_id) {
                    Some(pointer) => {
                        self.track(pointer, position);
                        let touches = self.contact_list();
                        recognizer.handle_input(PointerInput::TouchStart { touches: &touches }, model);
                    }
                    None => {
                        recognizer.handle_input(PointerInput::Down { position, modifiers }, model);
                    }
                }
            }
            PointerEvent::Move(e) => {
                let position = e.current.logical_point();
                let modifiers = modifiers(&e.current.modifiers);
                match touch_pointer(e.pointer.pointer_type, e.pointer.pointer_id) {
                    Some(pointer) => {
                        // Moves for a contact we never saw go down are stale;
                        // drop them rather than inventing a contact.
                        if self.update(pointer, position) {
                            let touches = self.contact_list();
                            recognizer
                                .handle_input(PointerInput::TouchMove { touches: &touches }, model);
                        }
                    }
                    None => {
                        recognizer.handle_input(PointerInput::Move { position, modifiers }, model);
                    }
                }
            }
            PointerEvent::Up(e) => {
                let position = e.state.logical_point();
                let modifiers = modifiers(&e.state.modifiers);
                match touch_pointer(e.pointer.pointer_type, e.pointer.pointer_id) {
                    Some(pointer) => {
                        if self.untrack(pointer) {
                            let touches = self.contact_list();
                            recognizer.handle_input(
                                PointerInput::TouchEnd {
                                    touches: &touches,
                                    modifiers,
                                },
                                model,
                            );
                        }
                    }
                    None => {
                        recognizer.handle_input(PointerInput::Up { position, modifiers }, model);
                    }
                }
            }
            PointerEvent::Leave(_) => {
                self.contacts.clear();
                recognizer.handle_input(PointerInput::Leave, model);
            }
            PointerEvent::Cancel(_) => {
                self.contacts.clear();
                recognizer.handle_input(PointerInput::Cancel, model);
            }
            PointerEvent::Scroll(e) => {
                let delta = resolve_scroll_delta(e, recognizer.view_size());
                recognizer.handle_input(
                    PointerInput::Wheel {
                        delta,
                        modifiers: modifiers(&e.state.modifiers),
                        position: Some(e.state.logical_point()),
                    },
                    model,
                );
            }
            PointerEvent::Gesture(e) => {
                let position = Some(e.state.logical_point());
                match &e.gesture {
                    PointerGesture::Pinch(delta) => {
                        recognizer.handle_input(
                            PointerInput::Magnify {
                                delta: f64::from(*delta),
                                position,
                            },
                            model,
                        );
                    }
                    PointerGesture::Rotate(delta) => {
                        recognizer.handle_input(
                            PointerInput::Rotate {
                                radians: f64::from(*delta),
                                position,
                            },
                            model,
                        );
                    }
                    _ => {}
                }
            }
            PointerEvent::Enter(_) => {}
        }
    }

    /// Number of touch contacts currently tracked.
    #[must_use]
    pub fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    fn track(&mut self, pointer: PointerId, position: Point) {
        if let Some(tracked) = self.contacts.iter_mut().find(|t| t.pointer == pointer) {
            tracked.contact.position = position;
            return;
        }
        let id = TouchId(self.next_touch_id);
        self.next_touch_id += 1;
        self.contacts.push(TrackedContact {
            pointer,
            contact: Contact { id, position },
        });
    }

    fn update(&mut self, pointer: PointerId, position: Point) -> bool {
        match self.contacts.iter_mut().find(|t| t.pointer == pointer) {
            Some(tracked) => {
                tracked.contact.position = position;
                true
            }
            None => false,
        }
    }

    fn untrack(&mut self, pointer: PointerId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|t| t.pointer != pointer);
        self.contacts.len() != before
    }

    fn contact_list(&self) -> Vec<Contact> {
        self.contacts.iter().map(|t| t.contact).collect()
    }
}

/// Returns the pointer id when this event belongs to a correlatable touch
/// contact; mouse/pen pointers (and touches without ids) flow through the
/// single-pointer path instead.
fn touch_pointer(pointer_type: PointerType, pointer_id: Option<PointerId>) -> Option<PointerId> {
    if pointer_type == PointerType::Touch {
        pointer_id
    } else {
        None
    }
}

fn modifiers(state: &ui_events::keyboard::Modifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if state.shift() {
        out |= Modifiers::SHIFT;
    }
    if state.ctrl() {
        out |= Modifiers::CTRL;
    }
    out
}

fn resolve_scroll_delta(event: &PointerScrollEvent, view_size: kurbo::Size) -> Vec2 {
    use ui_events::ScrollDelta;
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(event.state.scale_factor);
            Vec2::new(logical.x, logical.y)
        }
        ScrollDelta::LineDelta(x, y) => {
            Vec2::new(f64::from(*x) * LINE_SIZE, f64::from(*y) * LINE_SIZE)
        }
        ScrollDelta::PageDelta(x, y) => Vec2::new(
            f64::from(*x) * view_size.width,
            f64::from(*y) * view_size.height,
        ),
    }
}

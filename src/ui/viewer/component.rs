// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! Every message that changes what is shown goes through
//! [`ViewerState::apply`]; this component only adds presentation on top:
//! eased scale and offset, fades, the drawer slide and the info panel.

use crate::config::{
    ViewerConfig, APPEAR_FADE_DURATION, DEFAULT_DRAWER_OPEN, DEFAULT_SHOW_INFO_PANEL,
    DRAWER_SLIDE_DURATION, LINEAR_DURATION, PAGE_FADE_DURATION, SPRING_DURATION,
};
use crate::domain::error::PageError;
use crate::domain::viewer::{Offset, PageId, Pages, ViewerEvent, ViewerState};
use crate::i18n::fluent::I18n;
use crate::media::PageImages;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::{Easing, Gesture, Tween};
use crate::ui::viewer::{controls, drawer, info_panel, pane};
use fluent_bundle::FluentValue;
use iced::keyboard::{key::Named, Key, Modifiers};
use iced::widget::{container, Stack, Text};
use iced::{Element, Length};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Messages emitted by the viewer and its chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Gesture(Gesture),
    ZoomIn,
    ZoomOut,
    Reset,
    ToggleDrawer,
    SelectPage(PageId),
    NextPage,
    PreviousPage,
    ToggleInfoPanel,
    /// The window is shown for the first time.
    Appeared,
    /// Animation frame.
    Tick(Instant),
}

/// What the application should know after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The viewer state moved to a new snapshot.
    Transitioned(ViewerState),
    /// A page selection was refused; the previous state is kept.
    Rejected(PageError),
}

/// Environment passed down by the application when rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Viewer screen state.
#[derive(Debug, Clone)]
pub struct State {
    viewer: ViewerState,
    pages: Pages,
    images: PageImages,
    assets_dir: PathBuf,
    show_info_panel: bool,
    scale: Tween<f32>,
    offset: Tween<Offset>,
    content_opacity: Tween<f32>,
    drawer: Tween<f32>,
    now: Instant,
}

impl State {
    #[must_use]
    pub fn new(
        pages: Pages,
        images: PageImages,
        assets_dir: PathBuf,
        config: &ViewerConfig,
    ) -> Self {
        let mut viewer = ViewerState::new();
        if config.drawer_open.unwrap_or(DEFAULT_DRAWER_OPEN) {
            viewer = viewer.toggle_drawer();
        }

        Self {
            viewer,
            pages,
            images,
            assets_dir,
            show_info_panel: config.show_info_panel.unwrap_or(DEFAULT_SHOW_INFO_PANEL),
            scale: Tween::settled(viewer.scale),
            offset: Tween::settled(viewer.offset),
            content_opacity: Tween::settled(0.0),
            drawer: Tween::settled(drawer_target(viewer.is_drawer_open)),
            now: Instant::now(),
        }
    }

    /// Latest resolved viewer state.
    #[must_use]
    pub fn viewer(&self) -> ViewerState {
        self.viewer
    }

    #[must_use]
    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    #[must_use]
    pub fn show_info_panel(&self) -> bool {
        self.show_info_panel
    }

    /// Whether a frame subscription is needed.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scale.is_animating(now)
            || self.offset.is_animating(now)
            || self.content_opacity.is_animating(now)
            || self.drawer.is_animating(now)
    }

    /// Whether the last drawn frame was still mid-animation, so another
    /// frame is needed to reach the targets.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.is_animating(self.now)
    }

    /// Scale as currently drawn, which may lag behind [`Self::viewer`].
    #[must_use]
    pub fn displayed_scale(&self) -> f32 {
        self.scale.value(self.now)
    }

    #[must_use]
    pub fn displayed_offset(&self) -> Offset {
        self.offset.value(self.now)
    }

    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        self.now = now;

        let (event, easing) = match message {
            Message::Tick(_) => return Effect::None,
            Message::ToggleInfoPanel => {
                self.show_info_panel = !self.show_info_panel;
                return Effect::None;
            }
            Message::NextPage => match self.neighbour(1) {
                Some(id) => (ViewerEvent::SelectPage(id), Easing::Spring),
                None => return Effect::None,
            },
            Message::PreviousPage => match self.neighbour(-1) {
                Some(id) => (ViewerEvent::SelectPage(id), Easing::Spring),
                None => return Effect::None,
            },
            Message::Gesture(gesture) => gesture_event(gesture),
            Message::ZoomIn => (ViewerEvent::ZoomIn, Easing::Spring),
            Message::ZoomOut => (ViewerEvent::ZoomOut, Easing::Spring),
            Message::Reset => (ViewerEvent::Reset, Easing::Spring),
            Message::ToggleDrawer => (ViewerEvent::ToggleDrawer, Easing::EaseOut),
            Message::SelectPage(id) => (ViewerEvent::SelectPage(id), Easing::Spring),
            Message::Appeared => (ViewerEvent::Appeared, Easing::EaseOut),
        };

        let previous = self.viewer;
        match previous.apply(event, &self.pages) {
            Ok(next) => {
                tracing::trace!(?event, "viewer event applied");
                self.viewer = next;
                self.animate(previous, next, event, easing, now);
                Effect::Transitioned(next)
            }
            Err(err) => {
                tracing::warn!(?event, %err, "viewer event rejected");
                Effect::Rejected(err)
            }
        }
    }

    fn animate(
        &mut self,
        previous: ViewerState,
        next: ViewerState,
        event: ViewerEvent,
        easing: Easing,
        now: Instant,
    ) {
        let duration = easing_duration(easing);
        self.scale.go(next.scale, now, duration, easing);
        self.offset.go(next.offset, now, duration, easing);

        if matches!(event, ViewerEvent::SelectPage(_)) && next.page_index != previous.page_index {
            self.content_opacity
                .restart(0.0, 1.0, now, PAGE_FADE_DURATION, Easing::EaseOut);
        } else if next.is_animating && !previous.is_animating {
            self.content_opacity
                .go(1.0, now, APPEAR_FADE_DURATION, Easing::EaseOut);
        }

        if next.is_drawer_open != previous.is_drawer_open {
            self.drawer.go(
                drawer_target(next.is_drawer_open),
                now,
                DRAWER_SLIDE_DURATION,
                Easing::EaseOut,
            );
        }
    }

    fn neighbour(&self, step: i64) -> Option<PageId> {
        let id = i64::from(self.viewer.page_index.value()) + step;
        let id = PageId::new(u32::try_from(id).ok()?);
        self.pages.contains(id).then_some(id)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let page = self.viewer.current_page(&self.pages).ok();
        let image = page.and_then(|page| self.images.image(page));
        let opacity = self.content_opacity.value(self.now);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if image.is_none() {
            let name = page.map(|page| page.image_name.clone()).unwrap_or_default();
            let missing = env.i18n.tr_with_args(
                "viewer-image-missing",
                &[
                    ("name", FluentValue::from(name)),
                    ("dir", FluentValue::from(self.assets_dir.display().to_string())),
                ],
            );
            layers = layers.push(
                container(Text::new(missing).size(typography::BODY).color(palette::GRAY_400))
                    .center(Length::Fill),
            );
        }

        layers = layers.push(pane::view(
            image,
            self.displayed_scale(),
            self.displayed_offset(),
            opacity,
        ));

        layers = layers.push(
            container(info_panel::view(info_panel::ViewContext {
                i18n: env.i18n,
                visible: self.show_info_panel,
                scale: self.displayed_scale(),
                offset: self.displayed_offset(),
                page: self.viewer.page_index,
                page_count: self.pages.len(),
            }))
            .padding(spacing::MD)
            .align_top(Length::Fill)
            .align_left(Length::Fill),
        );

        layers = layers.push(
            container(controls::view(controls::ViewContext { i18n: env.i18n }))
                .padding(spacing::LG)
                .center_x(Length::Fill)
                .align_bottom(Length::Fill),
        );

        layers = layers.push(
            container(drawer::view(drawer::ViewContext {
                i18n: env.i18n,
                pages: &self.pages,
                images: &self.images,
                current: self.viewer.page_index,
                is_open: self.viewer.is_drawer_open,
                progress: self.drawer.value(self.now),
            }))
            .padding([spacing::XL, 0.0])
            .align_right(Length::Fill)
            .align_top(Length::Fill),
        );

        layers.into()
    }
}

fn drawer_target(is_open: bool) -> f32 {
    if is_open {
        1.0
    } else {
        0.0
    }
}

fn easing_duration(easing: Easing) -> Duration {
    match easing {
        Easing::Spring => SPRING_DURATION,
        Easing::Linear => LINEAR_DURATION,
        Easing::EaseOut => DRAWER_SLIDE_DURATION,
    }
}

/// Continuous samples follow the finger linearly; gesture ends settle with
/// the spring.
fn gesture_event(gesture: Gesture) -> (ViewerEvent, Easing) {
    match gesture {
        Gesture::DoubleTap => (ViewerEvent::DoubleTap, Easing::Spring),
        Gesture::DragChanged(translation) => (
            ViewerEvent::DragChanged(Offset::new(translation.x, translation.y)),
            Easing::Linear,
        ),
        Gesture::DragEnded => (ViewerEvent::DragEnded, Easing::Spring),
        Gesture::MagnifyChanged(value) => (ViewerEvent::MagnifyChanged(value), Easing::Linear),
        Gesture::MagnifyEnded => (ViewerEvent::MagnifyEnded, Easing::Spring),
    }
}

/// Keyboard shortcuts of the viewer screen.
#[must_use]
pub fn key_message(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousPage),
        Key::Named(Named::ArrowRight) => Some(Message::NextPage),
        Key::Character("+" | "=") => Some(Message::ZoomIn),
        Key::Character("-") => Some(Message::ZoomOut),
        Key::Character("0") => Some(Message::Reset),
        Key::Character("d" | "D") => Some(Message::ToggleDrawer),
        Key::Character("i" | "I") => Some(Message::ToggleInfoPanel),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use iced::Vector;

    fn state() -> State {
        State::new(
            Pages::default(),
            PageImages::default(),
            PathBuf::from("assets/pages"),
            &ViewerConfig::default(),
        )
    }

    fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn new_state_matches_config() {
        let config = ViewerConfig {
            show_info_panel: Some(false),
            drawer_open: Some(true),
        };
        let state = State::new(Pages::default(), PageImages::default(), PathBuf::new(), &config);
        assert!(!state.show_info_panel());
        assert!(state.viewer().is_drawer_open);
        assert_eq!(state.viewer().scale, 1.0);
        assert!(!state.is_animating(Instant::now()));
    }

    #[test]
    fn zoom_in_reports_transition_and_animates() {
        let mut state = state();
        let start = Instant::now();

        let effect = state.handle(Message::ZoomIn, start);
        let Effect::Transitioned(next) = effect else {
            panic!("expected transition, got {effect:?}");
        };
        assert_eq!(next.scale, 2.0);
        assert!(state.is_animating(after(start, 10)));
        assert!(!state.is_animating(after(start, 1_000)));
    }

    #[test]
    fn displayed_scale_catches_up_with_target() {
        let mut state = state();
        let start = Instant::now();
        state.handle(Message::Gesture(Gesture::DoubleTap), start);

        state.handle(Message::Tick(after(start, 1)), after(start, 1));
        assert!(state.displayed_scale() < 5.0);
        state.handle(Message::Tick(after(start, 400)), after(start, 400));
        assert_eq!(state.displayed_scale(), 5.0);
    }

    #[test]
    fn frames_are_needed_until_a_tick_reaches_the_target() {
        let mut state = state();
        let start = Instant::now();
        state.handle(Message::ZoomIn, start);
        assert!(state.needs_frames());

        state.handle(Message::Tick(after(start, 1_000)), after(start, 1_000));
        assert!(!state.needs_frames());
        assert_eq!(state.displayed_scale(), 2.0);
    }

    #[test]
    fn drag_gesture_sets_offset() {
        let mut state = state();
        let now = Instant::now();
        state.handle(Message::ZoomIn, now);
        state.handle(Message::Gesture(Gesture::DragChanged(Vector::new(20.0, -5.0))), now);
        assert_eq!(state.viewer().offset, Offset::new(20.0, -5.0));

        state.handle(Message::Gesture(Gesture::DragEnded), now);
        assert_eq!(state.viewer().offset, Offset::new(20.0, -5.0));
    }

    #[test]
    fn out_of_range_page_is_rejected() {
        let mut state = state();
        let effect = state.handle(Message::SelectPage(PageId::new(9)), Instant::now());
        assert_eq!(effect, Effect::Rejected(PageError::OutOfRange { id: 9, count: 4 }));
        assert_eq!(state.viewer().page_index, PageId::FIRST);
    }

    #[test]
    fn page_navigation_stops_at_the_ends() {
        let mut state = state();
        let now = Instant::now();

        assert_eq!(state.handle(Message::PreviousPage, now), Effect::None);
        assert_eq!(state.viewer().page_index, PageId::FIRST);

        for _ in 0..10 {
            state.handle(Message::NextPage, now);
        }
        assert_eq!(state.viewer().page_index, PageId::new(4));
        assert_eq!(state.handle(Message::NextPage, now), Effect::None);
    }

    #[test]
    fn page_switch_replays_fade() {
        let mut state = state();
        let start = Instant::now();
        state.handle(Message::Appeared, start);
        state.handle(Message::Tick(after(start, 2_000)), after(start, 2_000));
        assert!(!state.is_animating(after(start, 2_000)));

        state.handle(Message::SelectPage(PageId::new(3)), after(start, 2_000));
        assert!(state.is_animating(after(start, 2_100)));
        assert!(state.viewer().is_animating);
    }

    #[test]
    fn info_panel_toggle_does_not_touch_viewer_state() {
        let mut state = state();
        let before = state.viewer();
        assert_eq!(state.handle(Message::ToggleInfoPanel, Instant::now()), Effect::None);
        assert!(!state.show_info_panel());
        assert_eq!(state.viewer(), before);
    }

    #[test]
    fn drawer_slides_when_toggled() {
        let mut state = state();
        let start = Instant::now();
        state.handle(Message::ToggleDrawer, start);
        assert!(state.viewer().is_drawer_open);
        assert!(state.is_animating(after(start, 100)));
        assert!(!state.is_animating(after(start, 600)));
    }

    #[test]
    fn shortcuts_map_to_messages() {
        let none = Modifiers::empty();
        assert_eq!(key_message(&Key::Character("+".into()), none), Some(Message::ZoomIn));
        assert_eq!(key_message(&Key::Character("=".into()), none), Some(Message::ZoomIn));
        assert_eq!(key_message(&Key::Character("-".into()), none), Some(Message::ZoomOut));
        assert_eq!(key_message(&Key::Character("0".into()), none), Some(Message::Reset));
        assert_eq!(key_message(&Key::Character("d".into()), none), Some(Message::ToggleDrawer));
        assert_eq!(
            key_message(&Key::Character("i".into()), none),
            Some(Message::ToggleInfoPanel)
        );
        assert_eq!(
            key_message(&Key::Named(Named::ArrowRight), none),
            Some(Message::NextPage)
        );
        assert_eq!(key_message(&Key::Character("x".into()), none), None);
        assert_eq!(key_message(&Key::Character("+".into()), Modifiers::CTRL), None);
    }
}

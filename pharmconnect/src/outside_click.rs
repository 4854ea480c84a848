use iced::{
    Event, Point, Rectangle, Size, Subscription, event, mouse, touch, window,
};

/// Identity of a detector instance, used to tag its window listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DetectorId(&'static str);

impl DetectorId {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

/// A pointer-down observed anywhere in the window.
///
/// Mouse presses carry no position, the caller resolves them against the
/// last known cursor position. Touch presses carry their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerDown {
    pub(crate) position: Option<Point>,
}

/// Reports pointer-down events that land outside a bound region.
///
/// While armed the detector contributes one window-wide listener to the
/// subscription set; while disarmed it contributes none.
#[derive(Debug, Clone)]
pub(crate) struct OutsideClickDetector {
    id: DetectorId,
    region: Rectangle,
    armed: bool,
}

impl OutsideClickDetector {
    pub(crate) fn new(id: DetectorId) -> Self {
        Self {
            id,
            region: Rectangle::new(Point::ORIGIN, Size::ZERO),
            armed: false,
        }
    }

    pub(crate) fn region(&self) -> Rectangle {
        self.region
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.armed
    }

    /// Replace the region that counts as "inside".
    pub(crate) fn bind(&mut self, region: Rectangle) {
        self.region = region;
    }

    pub(crate) fn arm(&mut self) {
        self.armed = true;
    }

    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }

    /// Return `true` when a pointer-down at `position` must close the owner.
    pub(crate) fn is_outside(&self, position: Point) -> bool {
        self.armed && !self.region.contains(position)
    }

    /// Window listener for this detector, present only while armed.
    pub(crate) fn subscription(&self) -> Subscription<(DetectorId, PointerDown)> {
        if !self.armed {
            return Subscription::none();
        }

        event::listen_with(pointer_down).with(self.id)
    }
}

fn pointer_down(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<PointerDown> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            Some(PointerDown { position: None })
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerDown {
                position: Some(position),
            })
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::advanced::subscription::into_recipes;
    use iced::{Point, Rectangle, Size};

    use super::{DetectorId, OutsideClickDetector};

    const TEST_DETECTOR: DetectorId = DetectorId::new("test");

    fn armed_detector() -> OutsideClickDetector {
        let mut detector = OutsideClickDetector::new(TEST_DETECTOR);
        detector.bind(Rectangle::new(
            Point::new(100.0, 0.0),
            Size::new(200.0, 80.0),
        ));
        detector.arm();
        detector
    }

    fn count_closes(
        detector: &OutsideClickDetector,
        presses: &[Point],
    ) -> usize {
        presses
            .iter()
            .filter(|position| detector.is_outside(**position))
            .count()
    }

    #[test]
    fn given_armed_detector_when_pointer_down_outside_then_close_fires_once() {
        let detector = armed_detector();
        assert_eq!(count_closes(&detector, &[Point::new(10.0, 10.0)]), 1);
    }

    #[test]
    fn given_armed_detector_when_pointer_down_inside_then_close_never_fires() {
        let detector = armed_detector();
        assert_eq!(count_closes(&detector, &[Point::new(150.0, 40.0)]), 0);
    }

    #[test]
    fn given_disarmed_detector_when_pointer_down_outside_then_close_never_fires()
    {
        let mut detector = armed_detector();
        detector.disarm();

        assert!(!detector.is_armed());
        assert_eq!(count_closes(&detector, &[Point::new(10.0, 10.0)]), 0);
    }

    #[test]
    fn given_rearmed_detector_when_armed_twice_then_state_is_unchanged() {
        let mut detector = armed_detector();
        detector.arm();
        detector.arm();

        assert!(detector.is_armed());
        assert_eq!(count_closes(&detector, &[Point::new(10.0, 10.0)]), 1);
    }

    #[test]
    fn given_rebound_region_when_pointer_down_then_new_region_is_used() {
        let mut detector = armed_detector();
        detector.bind(Rectangle::new(Point::ORIGIN, Size::new(50.0, 50.0)));

        assert!(!detector.is_outside(Point::new(10.0, 10.0)));
        assert!(detector.is_outside(Point::new(150.0, 40.0)));
    }

    #[test]
    fn given_detector_lifecycle_when_subscribing_then_armed_means_one_listener()
    {
        let listeners = |detector: &OutsideClickDetector| {
            into_recipes(detector.subscription()).len()
        };

        let mut detector = OutsideClickDetector::new(TEST_DETECTOR);
        assert_eq!(listeners(&detector), 0);

        detector.arm();
        detector.arm();
        assert_eq!(listeners(&detector), 1);

        detector.disarm();
        assert_eq!(listeners(&detector), 0);
    }
}

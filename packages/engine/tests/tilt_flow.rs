use std::cell::RefCell;

use futures::executor::block_on;
use futures::future::{self, FutureExt, LocalBoxFuture};

use tilt_text_engine::domain::font::FontDescriptor;
use tilt_text_engine::systems::orientation::{OrientationError, PermissionState, ReadingSink, SensorPlatform};
use tilt_text_engine::systems::text_bodies::{TextExtents, TextMeasure};
use tilt_text_engine::{DemoConfig, GravityVector, OrientationReading, OrientationSource, Scene};

/// Sensor that grants after one prompt and replays whatever the test emits
#[derive(Default)]
struct ScriptedSensor {
    sink: RefCell<Option<ReadingSink>>,
}

impl ScriptedSensor {
    fn tilt(&self, alpha: f64, beta: f64, gamma: f64) {
        if let Some(sink) = self.sink.borrow().as_ref() {
            sink.push(OrientationReading::degrees(alpha, beta, gamma));
        }
    }
}

impl SensorPlatform for ScriptedSensor {
    fn is_supported(&self) -> bool {
        true
    }

    fn requires_permission(&self) -> bool {
        true
    }

    fn request_permission(&self) -> LocalBoxFuture<'static, Result<PermissionState, OrientationError>> {
        future::ready(Ok(PermissionState::Granted)).boxed_local()
    }

    fn subscribe(&self, sink: ReadingSink) -> Result<(), OrientationError> {
        *self.sink.borrow_mut() = Some(sink);
        Ok(())
    }

    fn unsubscribe(&self) {
        self.sink.borrow_mut().take();
    }
}

struct Square;

impl TextMeasure for Square {
    type Error = ();

    fn measure(&self, _text: &str, font: &FontDescriptor) -> Result<TextExtents, ()> {
        Ok(TextExtents { left: 0.0, right: font.size, ascent: font.size, descent: 0.0 })
    }
}

fn scene() -> Scene {
    let config = DemoConfig { body_count: 4, ..DemoConfig::default() };
    let mut scene = Scene::with_seed(config, 800.0, 600.0, 3);
    scene.create_bounds();
    scene.populate(&Square).unwrap();
    scene
}

#[test]
fn gravity_stays_down_until_access_is_granted() {
    let source = OrientationSource::new(ScriptedSensor::default());
    let mut scene = scene();

    source.platform().tilt(0.0, 0.0, -90.0);
    scene.frame_tick(source.orientation().as_ref());
    assert_eq!(scene.gravity(), GravityVector::default());

    assert!(block_on(source.request_access()));
    source.platform().tilt(0.0, 0.0, -90.0);
    scene.frame_tick(source.orientation().as_ref());
    assert_eq!(scene.gravity(), GravityVector::new(-1.0, 0.0));
}

#[test]
fn revoking_keeps_last_gravity_and_hides_overlay() {
    let source = OrientationSource::new(ScriptedSensor::default());
    let mut scene = scene();

    assert!(block_on(source.request_access()));
    source.platform().tilt(0.0, 45.0, 45.0);
    scene.frame_tick(source.orientation().as_ref());
    assert_eq!(scene.gravity(), GravityVector::new(0.5, 0.5));

    source.revoke_access();
    let commands = scene.frame_tick(source.orientation().as_ref()).to_vec();
    assert_eq!(scene.gravity(), GravityVector::new(0.5, 0.5));
    assert!(!commands.iter().any(|c| matches!(
        c,
        tilt_text_engine::DrawCommand::Text { text, .. } if text.starts_with("beta")
    )));
}

#[test]
fn labels_slide_toward_the_low_side() {
    let source = OrientationSource::new(ScriptedSensor::default());
    let mut scene = scene();
    assert!(block_on(source.request_access()));

    source.platform().tilt(0.0, 0.0, 90.0);
    scene.update_gravity(source.orientation().as_ref());
    for _ in 0..600 {
        scene.frame_tick(source.orientation().as_ref());
    }

    let handles: Vec<_> = scene.physics().handles().to_vec();
    for handle in handles.into_iter().filter(|h| scene.text_bodies().is_text(*h)) {
        let p = scene.physics().position(handle).unwrap();
        assert!(p.x > 400.0, "label stuck at x = {}", p.x);
    }
}

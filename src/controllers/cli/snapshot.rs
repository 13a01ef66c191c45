use crate::controllers::interactive::{ControllerError, InputEvent, InteractionController};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::explorer_config::ExplorerConfig;
use log::{debug, info};
use std::path::Path;

/// Headless session: replays scripted input through the interaction
/// controller and writes the resulting frame, overlay included.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    controller: InteractionController,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Result<Self, ControllerError> {
        Ok(Self {
            presenter,
            controller: InteractionController::new(config)?,
        })
    }

    pub fn replay(&mut self, events: &[InputEvent]) -> Result<(), ControllerError> {
        for event in events {
            let redraw = self.controller.handle(*event)?;
            debug!("{:?} -> {:?}", event, redraw);

            if redraw.field_changed() {
                debug!("field took {:?}", self.controller.last_render_duration());
            }
        }

        info!(
            "{} | {} | {} iteration(s), last render {:?}",
            self.controller.marker_z_label(),
            self.controller.marker_c_label(),
            self.controller.max_iterations(),
            self.controller.last_render_duration()
        );

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let frame = self.controller.overlay_frame();
        self.presenter.present(&frame, filepath.as_ref())?;
        info!("wrote {}", filepath.as_ref().display());

        Ok(())
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            width: 120,
            height: 80,
            zoom: 30,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn test_replay_drives_the_controller() {
        let presenter = RecordingPresenter::default();
        let mut snapshot = SnapshotController::new(&presenter, config()).unwrap();

        snapshot
            .replay(&[
                InputEvent::IncreaseIterations,
                InputEvent::IncreaseIterations,
                InputEvent::PointerPress(Point { x: 60, y: 40 }),
                InputEvent::PointerDrag(Point { x: 75, y: 40 }),
                InputEvent::PointerRelease,
            ])
            .unwrap();

        assert_eq!(snapshot.controller().max_iterations(), 3);
        assert_eq!(snapshot.controller().marker_z_label(), "Z: X= 0.5 / Y= 0.0");
    }

    #[test]
    fn test_write_presents_the_overlay_frame() {
        let presenter = RecordingPresenter::default();
        let snapshot = SnapshotController::new(&presenter, config()).unwrap();

        snapshot.write("out/snapshot.ppm").unwrap();

        let written = presenter.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out/snapshot.ppm"));
        assert_eq!(written[0].1, snapshot.controller().overlay_frame());
    }
}

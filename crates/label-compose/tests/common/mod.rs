#![allow(dead_code)]

use label_compose::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::result::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCanvas {
        width: u32,
        height: u32,
        background: Color,
    },
    SetResolution(u32, u32),
    Strip,
    ApplyProfile(PathBuf),
    Load(PathBuf),
    Scale {
        id: usize,
        width: u32,
        height: u32,
    },
    Sharpen(usize),
    Composite {
        src: usize,
        x: i64,
        y: i64,
    },
    Release(usize),
    Measure(TextStyle, String),
    DrawText {
        target: usize,
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
        draw: TextDraw,
    },
    Rectangle {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
        fill_opacity: f32,
    },
    Line {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
    },
    Encode {
        symbology: Symbology,
        value: String,
        module_width: u32,
        height: u32,
    },
}

#[derive(Debug)]
pub struct MockImage {
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub colorspace: Colorspace,
}

#[derive(Debug, thiserror::Error)]
#[error("mock failure: {0}")]
pub struct MockError(pub &'static str);

pub struct MockState {
    pub calls: Vec<Call>,
    pub live: usize,
    next_id: usize,
    pub canvas_colorspace: Colorspace,
    pub profile_colorspaces: HashMap<PathBuf, Colorspace>,
    pub loaded_size: (u32, u32),
    pub metrics: TextMetrics,
    /// Modules in every encoded barcode
    pub barcode_modules: u32,
    pub fail_sharpen: bool,
    pub fail_composite: bool,
    pub fail_draw_text: bool,
}

/// Backend that records every call and tracks how many images are alive
#[derive(Clone)]
pub struct MockBackend {
    pub state: Rc<RefCell<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                calls: Vec::new(),
                live: 0,
                next_id: 0,
                canvas_colorspace: Colorspace::Srgb,
                profile_colorspaces: HashMap::new(),
                loaded_size: (200, 100),
                metrics: TextMetrics {
                    width: 120.0,
                    ascent: 40.0,
                    descent: -10.0,
                    height: 55.0,
                },
                barcode_modules: 100,
                fail_sharpen: false,
                fail_composite: false,
                fail_draw_text: false,
            })),
        }
    }

    /// An image owned by the caller, as if decoded elsewhere
    pub fn picture(&self, width: u32, height: u32) -> MockImage {
        self.alloc(width, height)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn live(&self) -> usize {
        self.state.borrow().live
    }

    fn alloc(&self, width: u32, height: u32) -> MockImage {
        let mut state = self.state.borrow_mut();
        state.live += 1;
        state.next_id += 1;
        MockImage {
            id: state.next_id,
            width,
            height,
            colorspace: Colorspace::Srgb,
        }
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl RenderBackend for MockBackend {
    type Image = MockImage;
    type Error = MockError;

    fn create_canvas(
        &mut self,
        width: u32,
        height: u32,
        background: Color,
    ) -> Result<MockImage, MockError> {
        self.record(Call::CreateCanvas {
            width,
            height,
            background,
        });
        let mut image = self.alloc(width, height);
        image.colorspace = self.state.borrow().canvas_colorspace;
        Ok(image)
    }

    fn set_resolution(&mut self, _image: &mut MockImage, dpi_x: u32, dpi_y: u32) {
        self.record(Call::SetResolution(dpi_x, dpi_y));
    }

    fn dimensions(&self, image: &MockImage) -> (u32, u32) {
        (image.width, image.height)
    }

    fn colorspace(&self, image: &MockImage) -> Colorspace {
        image.colorspace
    }

    fn strip_metadata(&mut self, _image: &mut MockImage) {
        self.record(Call::Strip);
    }

    fn apply_color_profile(&mut self, image: &mut MockImage, profile: &Path) -> Result<(), MockError> {
        self.record(Call::ApplyProfile(profile.to_path_buf()));
        if let Some(colorspace) = self.state.borrow().profile_colorspaces.get(profile) {
            image.colorspace = *colorspace;
        }
        Ok(())
    }

    fn load_image(&mut self, path: &Path) -> Result<MockImage, MockError> {
        self.record(Call::Load(path.to_path_buf()));
        let (width, height) = self.state.borrow().loaded_size;
        Ok(self.alloc(width, height))
    }

    fn scale(&mut self, image: &MockImage, width: u32, height: u32) -> Result<MockImage, MockError> {
        self.record(Call::Scale {
            id: image.id,
            width,
            height,
        });
        Ok(self.alloc(width, height))
    }

    fn sharpen(&mut self, image: &MockImage) -> Result<MockImage, MockError> {
        self.record(Call::Sharpen(image.id));
        if self.state.borrow().fail_sharpen {
            return Err(MockError("sharpen"));
        }
        Ok(self.alloc(image.width, image.height))
    }

    fn composite_over(
        &mut self,
        _dst: &mut MockImage,
        src: &MockImage,
        x: i64,
        y: i64,
    ) -> Result<(), MockError> {
        self.record(Call::Composite { src: src.id, x, y });
        if self.state.borrow().fail_composite {
            return Err(MockError("composite"));
        }
        Ok(())
    }

    fn release(&mut self, image: MockImage) {
        self.record(Call::Release(image.id));
        self.state.borrow_mut().live -= 1;
    }

    fn measure_text(
        &mut self,
        _image: &MockImage,
        style: &TextStyle,
        text: &str,
    ) -> Result<TextMetrics, MockError> {
        self.record(Call::Measure(style.clone(), text.to_string()));
        Ok(self.state.borrow().metrics)
    }

    fn draw_text(
        &mut self,
        image: &mut MockImage,
        x: f64,
        y: f64,
        text: &str,
        style: &TextStyle,
        draw: TextDraw,
    ) -> Result<(), MockError> {
        self.record(Call::DrawText {
            target: image.id,
            x,
            y,
            text: text.to_string(),
            style: style.clone(),
            draw,
        });
        if self.state.borrow().fail_draw_text {
            return Err(MockError("draw text"));
        }
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        _image: &mut MockImage,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
        fill_opacity: f32,
    ) -> Result<(), MockError> {
        self.record(Call::Rectangle {
            x1,
            y1,
            x2,
            y2,
            stroke,
            fill_opacity,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        _image: &mut MockImage,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
    ) -> Result<(), MockError> {
        self.record(Call::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        });
        Ok(())
    }

    fn encode_barcode(
        &mut self,
        symbology: Symbology,
        value: &str,
        module_width: u32,
        height: u32,
    ) -> Result<MockImage, MockError> {
        self.record(Call::Encode {
            symbology,
            value: value.to_string(),
            module_width,
            height,
        });
        let modules = self.state.borrow().barcode_modules;
        Ok(self.alloc(modules * module_width, height))
    }
}

/// 50 x 30mm label at 300 dpi on white
pub fn session() -> (MockBackend, CanvasSession<MockBackend>) {
    session_with(SessionOptions::default())
}

pub fn session_with(options: SessionOptions) -> (MockBackend, CanvasSession<MockBackend>) {
    let backend = MockBackend::new();
    let session = CanvasSession::new(backend.clone(), 50.0, 30.0, options).unwrap();
    backend.clear_calls();
    (backend, session)
}

//! Progress line animation: trailing dots and a rotating color gradient

use super::step::{PipelineStep, ProgressMessage};

/// Ticks spent on each of the three dot suffixes
pub const DOT_PERIOD: u64 = 9;

const DOTS: [&str; 3] = [".  ", ".. ", "..."];

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// `#ffb87e`
pub const GRADIENT_START: Rgb = Rgb::new(0xff, 0xb8, 0x7e);
/// `#4c9999`
pub const GRADIENT_END: Rgb = Rgb::new(0x4c, 0x99, 0x99);

/// `steps` colors evenly spaced from `from` to `to`, both ends included
pub fn blend(from: Rgb, to: Rgb, steps: usize) -> Vec<Rgb> {
    let lerp = |a: u8, b: u8, t: f32| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (0..steps)
        .map(|i| {
            let t = if steps > 1 {
                i as f32 / (steps - 1) as f32
            } else {
                0.0
            };
            Rgb::new(lerp(from.r, to.r, t), lerp(from.g, to.g, t), lerp(from.b, to.b, t))
        })
        .collect()
}

/// Dot suffix for a tick count
pub fn dots(tick: u64) -> &'static str {
    let phase = tick % (DOT_PERIOD * 3);
    if phase < DOT_PERIOD {
        DOTS[0]
    } else if phase < DOT_PERIOD * 2 {
        DOTS[1]
    } else {
        DOTS[2]
    }
}

/// One rendered state of the progress line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub colors: Vec<Rgb>,
}

impl Frame {
    /// Color of the character at `index`, cycling through the palette
    pub fn color_at(&self, index: usize) -> Option<Rgb> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors[index % self.colors.len()])
        }
    }
}

/// Animation state owned by the render loop
#[derive(Debug, Clone)]
pub struct Animation {
    step: PipelineStep,
    base: String,
    text: String,
    tick: u64,
    colors: Vec<Rgb>,
}

impl Animation {
    pub fn new(step: PipelineStep) -> Self {
        let base = step.message().to_string();
        let text = format!("{}.", base);
        Self {
            step,
            colors: palette(&text),
            text,
            base,
            tick: 0,
        }
    }

    /// Switch to a new phase. Only a phase change replaces the base text.
    pub fn enter(&mut self, msg: &ProgressMessage) {
        self.step = msg.step;
        self.base = msg.text.clone();
        self.text = msg.text.clone();
        self.colors = palette(&self.text);
    }

    /// Advance one tick: pick the dot suffix and rotate the colors by one
    pub fn tick(&mut self) {
        self.tick += 1;
        if !self.step.is_terminal() {
            self.text = format!("{}{}", self.base, dots(self.tick));
        }
        self.colors.rotate_right(1);
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.text.clone(),
            colors: self.colors.clone(),
        }
    }
}

/// Gradient sized to the text shown when the phase began. Longer frames wrap.
fn palette(text: &str) -> Vec<Rgb> {
    blend(GRADIENT_START, GRADIENT_END, text.chars().count())
}

use std::fmt;
use std::str::FromStr;

use tokio::sync::watch;

/// Gap kept between the tile and the canvas edge.
pub const MARGIN: i64 = 10;
/// Smallest side the tile shrinks to, however small the canvas gets.
pub const MIN_SIDE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Red,
    Green,
    Blue,
}

impl FromStr for Slider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "r" | "red" => Ok(Slider::Red),
            "g" | "green" => Ok(Slider::Green),
            "b" | "blue" => Ok(Slider::Blue),
            _ => Err(format!("Invalid slider: {s}. Valid sliders are: r, g, b")),
        }
    }
}

/// Current position of the three sliders. Starts at white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderValues {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for SliderValues {
    fn default() -> Self {
        Self {
            red: 255,
            green: 255,
            blue: 255,
        }
    }
}

impl SliderValues {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Fill color as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn get(&self, slider: Slider) -> u8 {
        match slider {
            Slider::Red => self.red,
            Slider::Green => self.green,
            Slider::Blue => self.blue,
        }
    }

    pub fn with(mut self, slider: Slider, value: u8) -> Self {
        match slider {
            Slider::Red => self.red = value,
            Slider::Green => self.green = value,
            Slider::Blue => self.blue = value,
        }
        self
    }
}

/// Clamps a raw slider reading into `0..=255`, like a bounded scale widget does.
pub fn clamp_slider(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Tile rectangle in canvas coordinates, `(x0, y0)` top-left, `(x1, y1)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Default for TileRect {
    fn default() -> Self {
        // Placeholder until the first resize arrives.
        Self {
            x0: 0,
            y0: 0,
            x1: 100,
            y1: 100,
        }
    }
}

impl TileRect {
    pub fn side(&self) -> i64 {
        self.x1 - self.x0
    }
}

/// Largest centered square that leaves `MARGIN` around it, never smaller than `MIN_SIDE`.
pub fn tile_rect(canvas_width: u32, canvas_height: u32) -> TileRect {
    let width = canvas_width as i64;
    let height = canvas_height as i64;
    let side = (width.min(height) - 2 * MARGIN).max(MIN_SIDE);

    let x0 = (width - side).div_euclid(2);
    let y0 = (height - side).div_euclid(2);
    TileRect {
        x0,
        y0,
        x1: x0 + side,
        y1: y0 + side,
    }
}

/// Everything a redraw needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileState {
    pub color: SliderValues,
    pub rect: TileRect,
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill={} rect=({}, {}, {}, {})",
            self.color.hex(),
            self.rect.x0,
            self.rect.y0,
            self.rect.x1,
            self.rect.y1
        )
    }
}

/// Owns the tile state and notifies subscribers whenever it changes.
pub struct ColorTile {
    state: watch::Sender<TileState>,
}

impl Default for ColorTile {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorTile {
    pub fn new() -> Self {
        let (state, _) = watch::channel(TileState::default());
        Self { state }
    }

    /// A receiver that wakes on every redraw. Acts as the redraw callback.
    pub fn subscribe(&self) -> watch::Receiver<TileState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> TileState {
        *self.state.borrow()
    }

    /// Moves one slider. Returns whether a redraw was published.
    pub fn set_slider(&self, slider: Slider, value: u8) -> bool {
        self.state.send_if_modified(|state| {
            let color = state.color.with(slider, value);
            Self::replace(&mut state.color, color)
        })
    }

    pub fn set_color(&self, color: SliderValues) -> bool {
        self.state
            .send_if_modified(|state| Self::replace(&mut state.color, color))
    }

    /// Refits the tile to a new canvas size.
    pub fn resize(&self, canvas_width: u32, canvas_height: u32) -> bool {
        let rect = tile_rect(canvas_width, canvas_height);
        self.state
            .send_if_modified(|state| Self::replace(&mut state.rect, rect))
    }

    /// Applies a parsed command. Returns false for `Quit`.
    pub fn apply(&self, command: Command) -> bool {
        match command {
            Command::Set(slider, value) => {
                self.set_slider(slider, value);
            }
            Command::Color(color) => {
                self.set_color(color);
            }
            Command::Resize(width, height) => {
                self.resize(width, height);
            }
            Command::Quit => return false,
        }
        true
    }

    fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

/// One line of input to the standalone runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Set(Slider, u8),
    Color(SliderValues),
    Resize(u32, u32),
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let number = |word: &str| {
            word.parse::<i64>()
                .map_err(|_| format!("Expected a number, got: {word}"))
        };

        match words.as_slice() {
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["rgb", r, g, b] => Ok(Command::Color(SliderValues::new(
                clamp_slider(number(*r)?),
                clamp_slider(number(*g)?),
                clamp_slider(number(*b)?),
            ))),
            ["resize", w, h] => {
                let width = u32::try_from(number(*w)?.max(0)).unwrap_or(u32::MAX);
                let height = u32::try_from(number(*h)?.max(0)).unwrap_or(u32::MAX);
                Ok(Command::Resize(width, height))
            }
            [slider, value] => Ok(Command::Set(slider.parse()?, clamp_slider(number(*value)?))),
            _ => Err(format!(
                "Invalid command: {s}. Expected: r|g|b VALUE, rgb R G B, resize W H, quit"
            )),
        }
    }
}

//! The fixed-layout player screen.

/// Number of lines on the player screen. Never changes at runtime.
pub const LINE_COUNT: usize = 11;

const BAR_EMPTY: char = '░';

// Logo rows are split around the 6-column transport glyph (columns 10..16).
const LOGO: [(&str, &str); 3] = [
    ("██████    ", "    █  ▄██    ██▄  █    █ ▄███"),
    ("██████    ", "    █ ████    ████ █      ██  "),
    ("██████    ", "    █  ▀██    ██▀  █    ███▀ █"),
];

const PLAY_GLYPH: [&str; 3] = ["██▄▄  ", "██████", "██▀▀  "];
const PAUSE_GLYPH: [&str; 3] = ["██  ██", "██  ██", "██  ██"];

/// One renderable line: its text and whether it is centered in the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub centered: bool,
}

impl Line {
    fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            centered: true,
        }
    }

    fn left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            centered: false,
        }
    }
}

/// Which transport glyph the logo shows.
///
/// The glyph advertises the available action: pause bars while playing, the
/// play triangle while paused.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transport {
    Playing,
    Paused,
}

impl Transport {
    fn rows(self) -> [&'static str; 3] {
        match self {
            Transport::Playing => PAUSE_GLYPH,
            Transport::Paused => PLAY_GLYPH,
        }
    }
}

/// Named-field screen model. `lines` yields the rows in rendering order.
#[derive(Debug, Clone)]
pub struct DisplayModel {
    title: String,
    bar: String,
    readout: String,
    transport: Transport,
    legend: String,
}

impl DisplayModel {
    /// Create the idle screen for a box of `box_width` columns.
    pub fn new(box_width: usize, legend: impl Into<String>) -> Self {
        Self {
            title: "----".to_string(),
            bar: BAR_EMPTY.to_string().repeat(box_width),
            readout: "--:--".to_string(),
            transport: Transport::Playing,
            legend: legend.into(),
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[cfg(test)]
    pub fn bar(&self) -> &str {
        &self.bar
    }

    #[cfg(test)]
    pub fn readout(&self) -> &str {
        &self.readout
    }

    /// Replace the two geometry-dependent lines.
    pub fn set_progress(&mut self, bar: String, readout: String) {
        self.bar = bar;
        self.readout = readout;
    }

    #[cfg(test)]
    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = transport;
    }

    pub fn lines(&self) -> [Line; LINE_COUNT] {
        let glyph = self.transport.rows();
        let logo = |i: usize| Line::centered(format!("{}{}{}", LOGO[i].0, glyph[i], LOGO[i].1));

        [
            Line::left(self.title.clone()),
            Line::centered(""),
            Line::centered(self.bar.clone()),
            Line::centered(""),
            Line::centered(self.readout.clone()),
            Line::centered(""),
            logo(0),
            logo(1),
            logo(2),
            Line::centered(""),
            Line::centered(self.legend.clone()),
        ]
    }
}

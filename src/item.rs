//! The item store: candidate lines and their display widths.

use std::io::BufRead;

use crate::input::INPUT_CAPACITY;

/// Stable handle of an item inside the [`ItemStore`].
///
/// Match lists and pages reference items by id so that rebuilding them never
/// leaves a dangling pointer behind.
pub type ItemId = usize;

/// One candidate line offered to the user.
///
/// The text is immutable after load; the display width is filled in by
/// [`ItemStore::measure`] before the first layout.
#[derive(Debug, Clone)]
pub struct Item {
    text: String,
    width: u16,
}

impl Item {
    fn new(text: String) -> Self {
        Self { text, width: 0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in cells, valid after [`ItemStore::measure`].
    pub fn width(&self) -> u16 {
        self.width
    }
}

/// Measures the on-screen width of a string.
///
/// The production implementation is [`CellMeasure`]; tests substitute their
/// own widths to pin page boundaries.
pub trait Measure {
    fn width(&self, text: &str) -> u16;
}

/// Unicode display width in terminal cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellMeasure;

impl Measure for CellMeasure {
    fn width(&self, text: &str) -> u16 {
        unicode_display_width::width(text).min(u64::from(u16::MAX)) as u16
    }
}

/// The flat, load-once list of candidate items.
pub struct ItemStore {
    items: Vec<Item>,
    max_width: u16,
}

impl ItemStore {
    /// Reads one item per line until end of stream.
    ///
    /// Input order is preserved and duplicate lines stay distinct. Lines
    /// longer than the input buffer limit are truncated at a character
    /// boundary. When an allocation fails, reading stops and the items
    /// loaded so far are kept.
    pub fn read_from<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut items: Vec<Item> = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let mut text = String::from_utf8_lossy(&buf).into_owned();
            if text.len() > INPUT_CAPACITY - 1 {
                text.truncate(text.floor_char_boundary(INPUT_CAPACITY - 1));
            }
            if items.try_reserve(1).is_err() {
                warn!("out of memory after {} items, truncating input", items.len());
                break;
            }
            items.push(Item::new(text));
        }
        debug!("loaded {} items", items.len());
        Ok(Self { items, max_width: 0 })
    }

    /// Builds a store from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: lines.into_iter().map(|l| Item::new(l.into())).collect(),
            max_width: 0,
        }
    }

    /// Assigns every item its display width and records the maximum.
    ///
    /// The maximum width sizes the fixed input column in the horizontal
    /// layout. Must run before the first pagination.
    pub fn measure(&mut self, measure: &dyn Measure) {
        self.max_width = 0;
        for item in &mut self.items {
            item.width = measure.width(&item.text);
            self.max_width = self.max_width.max(item.width);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> &Item {
        &self.items[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Widest item in cells, 0 until measured or when the store is empty.
    pub fn max_width(&self) -> u16 {
        self.max_width
    }
}

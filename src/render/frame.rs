use crate::core::ChartLayout;
use crate::error::ChartResult;
use crate::render::{CellPrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Named sections of the chart scene, in canonical draw order.
///
/// Sections become identifiable groups in the emitted document, so external
/// tooling can address the axes and the legend directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSection {
    XAxis,
    YAxis,
    Legend,
    Annotations,
}

impl FrameSection {
    pub const CANONICAL_ORDER: [Self; 4] = [Self::XAxis, Self::YAxis, Self::Legend, Self::Annotations];

    /// Group id in the emitted document, when the section carries one.
    #[must_use]
    pub fn element_id(self) -> Option<&'static str> {
        match self {
            Self::XAxis => Some("x-axis"),
            Self::YAxis => Some("y-axis"),
            Self::Legend => Some("legend"),
            Self::Annotations => None,
        }
    }
}

/// Primitives of one named scene section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPrimitives {
    pub section: FrameSection,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl SectionPrimitives {
    #[must_use]
    fn empty(section: FrameSection) -> Self {
        Self {
            section,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Cell primitives draw first, then the sections in canonical order. All
/// coordinates are plot-space; backends apply the margin translation once.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub layout: ChartLayout,
    pub cells: Vec<CellPrimitive>,
    pub sections: Vec<SectionPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            cells: Vec::new(),
            sections: FrameSection::CANONICAL_ORDER
                .into_iter()
                .map(SectionPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_cell(&mut self, cell: CellPrimitive) {
        self.cells.push(cell);
    }

    pub fn push_line(&mut self, section: FrameSection, line: LinePrimitive) {
        self.section_mut(section).lines.push(line);
    }

    pub fn push_rect(&mut self, section: FrameSection, rect: RectPrimitive) {
        self.section_mut(section).rects.push(rect);
    }

    pub fn push_text(&mut self, section: FrameSection, text: TextPrimitive) {
        self.section_mut(section).texts.push(text);
    }

    #[must_use]
    pub fn section(&self, section: FrameSection) -> Option<&SectionPrimitives> {
        self.sections
            .iter()
            .find(|candidate| candidate.section == section)
    }

    fn section_mut(&mut self, section: FrameSection) -> &mut SectionPrimitives {
        let index = match self
            .sections
            .iter()
            .position(|candidate| candidate.section == section)
        {
            Some(index) => index,
            None => {
                self.sections.push(SectionPrimitives::empty(section));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;

        for cell in &self.cells {
            cell.validate()?;
        }
        for section in &self.sections {
            for line in &section.lines {
                line.validate()?;
            }
            for rect in &section.rects {
                rect.validate()?;
            }
            for text in &section.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.sections.iter().all(SectionPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| section.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.sections.iter().map(|section| section.rects.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.sections.iter().map(|section| section.texts.len()).sum()
    }
}

use crate::export::layout::{fit_cell, text_width};
use crate::export::model::{COLUMNS, HEADERS, WeekReport, column_widths};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Single landscape page holding the weekly table.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    header_row_h: f32,
    row_h: f32,
    cell_padding: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
    subtitle_font_size: f32,
    brand_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        // WinAnsi so that "×" in the Output column prints correctly
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 landscape
            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            header_row_h: 24.0,
            row_h: 30.0,
            cell_padding: 4.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
            subtitle_font_size: 11.0,
            brand_font_size: 18.0,
        }
    }

    pub fn printable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    /// Interior width of a cell, the space text may use.
    pub fn cell_interior(&self, cell_w: f32) -> f32 {
        cell_w - 2.0 * self.cell_padding
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(REGULAR, self.font_id);
        fonts.pair(BOLD, self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        content: &mut Content,
        font: Name,
        x: f32,
        y: f32,
        size: f32,
        text: &str,
        gray: f32,
    ) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_fill_gray(gray);
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_centered(&self, content: &mut Content, font: Name, y: f32, size: f32, text: &str) {
        let w = text_width(text, size);
        let x = ((self.page_w - w) / 2.0).max(self.margin);
        self.draw_text(content, font, x, y, size, text, 0.0);
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: [f32; 3]) {
        content.save_state();
        content.set_fill_rgb(rgb[0], rgb[1], rgb[2]);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.35, 0.35, 0.35);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    /// One table row; every cell is fitted on a single line.
    #[allow(clippy::too_many_arguments)]
    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        h: f32,
        col_widths: &[f32; COLUMNS],
        row: &[String],
        font: Name,
        font_size: f32,
        gray: f32,
    ) {
        let mut x = self.margin;
        let baseline = y + (h - font_size) / 2.0 + 2.0;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            let cell = fit_cell(text, self.cell_interior(*w), font_size);
            if !cell.text.is_empty() {
                self.draw_text(
                    content,
                    font,
                    x + self.cell_padding,
                    baseline,
                    font_size,
                    &cell.text,
                    gray,
                );
            }
            self.draw_cell_borders(content, x, y, *w, h);
            x += w;
        }
    }

    fn draw_letterhead(&self, content: &mut Content, report: &WeekReport) {
        let top = self.page_h - self.margin;
        if let Some(org) = &report.organization {
            self.draw_text(
                content,
                BOLD,
                self.margin,
                top - self.brand_font_size,
                self.brand_font_size,
                org,
                0.0,
            );
        }
        if let Some(tagline) = &report.tagline {
            self.draw_text(
                content,
                REGULAR,
                self.margin,
                top - self.brand_font_size - 14.0,
                self.font_size,
                tagline,
                0.3,
            );
        }
    }

    /// Lay out the whole report on one page.
    pub fn write_report(&mut self, report: &WeekReport) {
        let col_widths = column_widths(self.printable_width());
        let table_w = self.printable_width();
        let header_row: Vec<String> = HEADERS.iter().map(|s| s.to_string()).collect();

        let mut content = self.new_page();
        self.draw_letterhead(&mut content, report);

        // Titolo e sottotitolo centrati
        let mut y = self.page_h - self.margin - 60.0;
        self.draw_centered(&mut content, BOLD, y, self.title_font_size, &report.title);
        y -= 20.0;
        self.draw_centered(
            &mut content,
            REGULAR,
            y,
            self.subtitle_font_size,
            &report.subtitle,
        );

        // header tabella: fondo scuro, testo chiaro
        y -= 20.0 + self.header_row_h;
        self.fill_rect(
            &mut content,
            self.margin,
            y,
            table_w,
            self.header_row_h,
            [0.12, 0.38, 0.20],
        );
        self.draw_row(
            &mut content,
            y,
            self.header_row_h,
            &col_widths,
            &header_row,
            BOLD,
            self.header_font_size,
            1.0,
        );

        for (i, row) in report.rows.iter().enumerate() {
            y -= self.row_h;

            // zebra stripe
            if i % 2 == 0 {
                self.fill_rect(
                    &mut content,
                    self.margin,
                    y,
                    table_w,
                    self.row_h,
                    [0.93, 0.96, 0.93],
                );
            }

            self.draw_row(
                &mut content,
                y,
                self.row_h,
                &col_widths,
                row,
                REGULAR,
                self.font_size,
                0.0,
            );
        }

        self.finalize_page(content);

        let info_id = self.fresh_ref();
        self.pdf
            .document_info(info_id)
            .title(TextStr(&report.title))
            .creator(TextStr("rWorkplan"));
    }

    /// Close the document and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        // Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

/// Encode text for a WinAnsi Type1 font. Unmappable characters become '?'.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            n @ (0x20..=0x7E | 0xA0..=0xFF) => n as u8,
            _ => match c {
                '€' => 0x80,
                '…' => 0x85,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '–' => 0x96,
                '—' => 0x97,
                _ => b'?',
            },
        })
        .collect()
}

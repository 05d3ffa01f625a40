//! The five-page commercial catalog template.
//!
//! Pages are assembled by hand as PDF content streams so the output is a
//! pure function of the submission and the calendar year: same input, same
//! bytes, always five pages (cover, about, advantages, proposal, thanks).

use chrono::{Datelike, Local, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use super::common::{encode_win_ansi, format_currency, validity_date_label};
use super::{RenderedDocument, RenderError};
use crate::proposal::models::ProposalSubmission;

pub const PAGE_COUNT: usize = 5;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 60.0;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

// Palette lifted from the original catalog artwork.
type Rgb = (f32, f32, f32);
const DARK: Rgb = (0.059, 0.094, 0.125);
const GREEN: Rgb = (0.0, 1.0, 0.255);
const CYAN: Rgb = (0.0, 1.0, 1.0);
const BLUE: Rgb = (0.0, 0.533, 0.667);
const LIGHT_BLUE: Rgb = (0.910, 0.957, 0.973);
const WHITE: Rgb = (1.0, 1.0, 1.0);
const BORDER_GRAY: Rgb = (0.878, 0.878, 0.878);
const TEXT_DARK: Rgb = (0.2, 0.2, 0.2);
const TEXT_MUTED: Rgb = (0.4, 0.4, 0.4);
const TEXT_FAINT: Rgb = (0.6, 0.6, 0.6);

const COVER_TITLE_LINES: [&str; 2] = ["Proposta", "comercial"];
const COVER_SUBTITLE: &str = "FOLHITA COMUNICAÇÃO VISUAL E LED";
const COVER_TAGLINE: &str = "O MAIOR OUTDOOR DE LED DA BAHIA";
const COVER_WORDMARK: &str = "folhita";

const ABOUT_TITLE: &str = "Quem somos?";
const ABOUT_LINES: [&str; 7] = [
    "A Folhita Comunicação Visual é especialista em visibilidade",
    "para marcas e negócios, com os maiores e mais impactantes",
    "outdoors de LED da Bahia. Nossa tecnologia de última geração",
    "em painéis de LED permite que sua mensagem se destaque,",
    "alcance mais pessoas e gere resultados reais. Quando se trata",
    "de comunicação visual de alto impacto, a Folhita é a escolha",
    "certa para transformar sua marca em uma referência.",
];
const ABOUT_TAGLINE: &str = "Folhita - Visibilidade que move seu negócio!";

const ADVANTAGES_TITLE_LINES: [&str; 2] = ["Vantagens de", "anunciar com a gente"];
const ADVANTAGES: [&str; 5] = [
    "10 mil pessoas alcançadas por dia",
    "Exibição da sua marca 262 por dia",
    "Locais estratégicos",
    "Fortalecimento da sua marca",
    "Aumento da sua taxa de vendas",
];

const TABLE_HEADERS: [&str; 4] = ["DURAÇÃO DO VÍDEO", "LOCAL", "TEMPO DE CONTRATO", "VALOR"];
const PAYMENT_METHODS: &str = "PIX (SEM JUROS) | CARTÃO DE CRÉDITO (COM JUROS) | BOLETO (3,5% TAXA)";

const THANKS_TITLE: &str = "Obrigado";
const THANKS_LINES: [&str; 6] = [
    "Agradecemos imensamente por nos permitir apresentar a",
    "Folhita Comunicação Visual e LED! Estamos prontos para",
    "transformar sua marca com nossa comunicação de impacto,",
    "seja nos maiores outdoors de LED da Bahia ou com nossos",
    "materiais personalizados que deixam sua marca presente",
    "no dia a dia do seu público.",
];
const CONTACT_LABEL: &str = "Fale conosco";
const CONTACT_NUMBER: &str = "73 9982-7391";
const FOOTER: &str = "Copyright © 2024 @folhita_cv, all rights reserved.";

/// Stateless renderer for the five-page commercial catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogRenderer;

impl CatalogRenderer {
    /// Render a submission with the current calendar year and a fresh
    /// download filename.
    pub fn render(&self, submission: &ProposalSubmission) -> Result<RenderedDocument, RenderError> {
        let pdf = render_document(submission, Local::now().year())?;
        let filename = format!(
            "proposta-comercial-folhita-{}.pdf",
            Utc::now().timestamp_millis()
        );
        Ok(RenderedDocument {
            filename,
            pdf,
            page_count: PAGE_COUNT,
        })
    }
}

/// Assemble the five catalog pages for a fixed calendar year.
pub fn render_document(submission: &ProposalSubmission, year: i32) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => font_regular,
            FONT_BOLD => font_bold,
        },
    });

    let pages = [
        cover_page(year),
        about_page(),
        advantages_page(),
        proposal_page(submission, year),
        thanks_page(),
    ];

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0f32.into(), 0f32.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_total = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_total,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn cover_page(year: i32) -> Vec<Operation> {
    let mut ops = Vec::new();
    fill_rect(&mut ops, DARK, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);

    // Slanted green panel over the left side of the page.
    set_fill(&mut ops, GREEN);
    ops.push(Operation::new("m", vec![0f32.into(), 0f32.into()]));
    ops.push(Operation::new("l", vec![0f32.into(), PAGE_HEIGHT.into()]));
    ops.push(Operation::new("l", vec![390f32.into(), PAGE_HEIGHT.into()]));
    ops.push(Operation::new("l", vec![250f32.into(), 0f32.into()]));
    ops.push(Operation::new("h", vec![]));
    ops.push(Operation::new("f", vec![]));

    // Calendar-year badge in the top-right corner.
    set_stroke(&mut ops, GREEN);
    stroke_circle(&mut ops, 505.0, 772.0, 30.0, 2.0);
    set_fill(&mut ops, WHITE);
    text_centered(&mut ops, FONT_BOLD, 18.0, 505.0, 765.0, &year.to_string());

    set_fill(&mut ops, WHITE);
    text_right(&mut ops, FONT_BOLD, 48.0, 535.0, 540.0, COVER_TITLE_LINES[0]);
    text_right(&mut ops, FONT_BOLD, 48.0, 535.0, 488.0, COVER_TITLE_LINES[1]);

    set_stroke(&mut ops, CYAN);
    stroke_rect(&mut ops, 230.0, 186.0, 305.0, 44.0, 2.0);
    text_centered(&mut ops, FONT_BOLD, 14.0, 382.5, 202.0, COVER_SUBTITLE);

    text_right(&mut ops, FONT_BOLD, 12.0, 535.0, 150.0, COVER_TAGLINE);

    set_fill(&mut ops, GREEN);
    text_right(&mut ops, FONT_BOLD, 28.0, 535.0, 64.0, COVER_WORDMARK);

    ops
}

fn about_page() -> Vec<Operation> {
    let mut ops = Vec::new();
    fill_rect(&mut ops, DARK, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);

    set_fill(&mut ops, GREEN);
    text(&mut ops, FONT_BOLD, 40.0, MARGIN, 720.0, ABOUT_TITLE);

    set_fill(&mut ops, WHITE);
    let mut y = 660.0;
    for line in ABOUT_LINES {
        text(&mut ops, FONT_REGULAR, 12.0, MARGIN, y, line);
        y -= 22.0;
    }

    text(&mut ops, FONT_BOLD, 14.0, MARGIN, y - 24.0, ABOUT_TAGLINE);
    ops
}

fn advantages_page() -> Vec<Operation> {
    let mut ops = Vec::new();
    fill_rect(&mut ops, DARK, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);

    set_fill(&mut ops, WHITE);
    text(&mut ops, FONT_BOLD, 26.0, MARGIN, 740.0, ADVANTAGES_TITLE_LINES[0]);
    text(&mut ops, FONT_BOLD, 26.0, MARGIN, 708.0, ADVANTAGES_TITLE_LINES[1]);

    set_stroke(&mut ops, CYAN);
    let mut y = 630.0;
    for advantage in ADVANTAGES {
        stroke_rect(&mut ops, MARGIN, y, 330.0, 40.0, 2.0);
        set_fill(&mut ops, WHITE);
        text(&mut ops, FONT_REGULAR, 12.0, MARGIN + 16.0, y + 15.0, advantage);
        y -= 56.0;
    }

    ops
}

fn proposal_page(submission: &ProposalSubmission, year: i32) -> Vec<Operation> {
    let mut ops = Vec::new();
    fill_rect(&mut ops, WHITE, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);

    set_fill(&mut ops, BLUE);
    text(&mut ops, FONT_BOLD, 26.0, MARGIN, 760.0, "Proposta comercial");

    set_fill(&mut ops, TEXT_DARK);
    text(&mut ops, FONT_REGULAR, 11.0, MARGIN, 722.0, "Direcionada para:");
    text(&mut ops, FONT_BOLD, 14.0, MARGIN, 704.0, &submission.location);

    set_fill(&mut ops, TEXT_FAINT);
    text_right(&mut ops, FONT_REGULAR, 9.0, 535.0, 726.0, "Orçamento válido até");
    set_fill(&mut ops, TEXT_DARK);
    text_right(
        &mut ops,
        FONT_BOLD,
        12.0,
        535.0,
        710.0,
        &validity_date_label(&submission.valid_until, year),
    );
    text_right(&mut ops, FONT_REGULAR, 9.0, 535.0, 688.0, "Número da proposta");
    text_right(&mut ops, FONT_BOLD, 9.0, 535.0, 676.0, &submission.proposal_code);

    text(&mut ops, FONT_BOLD, 12.0, MARGIN, 662.0, "Validade da proposta");

    // Table header band with the accent rule underneath.
    fill_rect(&mut ops, LIGHT_BLUE, MARGIN, 612.0, 475.0, 28.0);
    fill_rect(&mut ops, BLUE, MARGIN, 610.0, 475.0, 2.0);
    set_fill(&mut ops, BLUE);
    text(&mut ops, FONT_BOLD, 8.0, 68.0, 622.0, TABLE_HEADERS[0]);
    text(&mut ops, FONT_BOLD, 8.0, 148.0, 622.0, TABLE_HEADERS[1]);
    text(&mut ops, FONT_BOLD, 8.0, 338.0, 622.0, TABLE_HEADERS[2]);
    text_right(&mut ops, FONT_BOLD, 8.0, 527.0, 622.0, TABLE_HEADERS[3]);

    let mut y = 566.0;
    for plan in &submission.plans {
        set_stroke(&mut ops, BORDER_GRAY);
        stroke_rect(&mut ops, MARGIN, y, 475.0, 34.0, 0.75);

        set_fill(&mut ops, BLUE);
        text(&mut ops, FONT_BOLD, 11.0, 68.0, y + 13.0, &plan.duration);
        set_fill(&mut ops, TEXT_DARK);
        text(&mut ops, FONT_REGULAR, 9.0, 148.0, y + 13.0, &plan.location);
        text(&mut ops, FONT_REGULAR, 10.0, 338.0, y + 13.0, &plan.contract_time);
        set_fill(&mut ops, BLUE);
        text_right(
            &mut ops,
            FONT_BOLD,
            11.0,
            527.0,
            y + 13.0,
            &format_currency(&plan.value),
        );

        y -= 44.0;
    }

    set_fill(&mut ops, TEXT_MUTED);
    text_centered(
        &mut ops,
        FONT_REGULAR,
        10.0,
        PAGE_WIDTH / 2.0,
        y - 8.0,
        PAYMENT_METHODS,
    );

    ops
}

fn thanks_page() -> Vec<Operation> {
    let mut ops = Vec::new();
    fill_rect(&mut ops, DARK, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);

    set_fill(&mut ops, GREEN);
    text_centered(&mut ops, FONT_BOLD, 48.0, PAGE_WIDTH / 2.0, 560.0, THANKS_TITLE);

    set_fill(&mut ops, WHITE);
    let mut y = 490.0;
    for line in THANKS_LINES {
        text_centered(&mut ops, FONT_REGULAR, 12.0, PAGE_WIDTH / 2.0, y, line);
        y -= 22.0;
    }

    set_stroke(&mut ops, GREEN);
    stroke_rect(&mut ops, 167.5, 280.0, 260.0, 56.0, 2.0);
    set_fill(&mut ops, WHITE);
    text_centered(&mut ops, FONT_REGULAR, 12.0, PAGE_WIDTH / 2.0, 314.0, CONTACT_LABEL);
    text_centered(&mut ops, FONT_BOLD, 18.0, PAGE_WIDTH / 2.0, 292.0, CONTACT_NUMBER);

    set_fill(&mut ops, TEXT_FAINT);
    text_centered(&mut ops, FONT_REGULAR, 9.0, PAGE_WIDTH / 2.0, 80.0, FOOTER);

    ops
}

fn set_fill(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "rg",
        vec![color.0.into(), color.1.into(), color.2.into()],
    ));
}

fn set_stroke(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "RG",
        vec![color.0.into(), color.1.into(), color.2.into()],
    ));
}

fn fill_rect(ops: &mut Vec<Operation>, color: Rgb, x: f32, y: f32, width: f32, height: f32) {
    set_fill(ops, color);
    ops.push(Operation::new(
        "re",
        vec![x.into(), y.into(), width.into(), height.into()],
    ));
    ops.push(Operation::new("f", vec![]));
}

fn stroke_rect(ops: &mut Vec<Operation>, x: f32, y: f32, width: f32, height: f32, line_width: f32) {
    ops.push(Operation::new("w", vec![line_width.into()]));
    ops.push(Operation::new(
        "re",
        vec![x.into(), y.into(), width.into(), height.into()],
    ));
    ops.push(Operation::new("S", vec![]));
}

/// Approximate a circle with four Bézier arcs and stroke it.
fn stroke_circle(ops: &mut Vec<Operation>, cx: f32, cy: f32, radius: f32, line_width: f32) {
    const K: f32 = 0.5523;
    let kr = K * radius;

    ops.push(Operation::new("w", vec![line_width.into()]));
    ops.push(Operation::new("m", vec![(cx + radius).into(), cy.into()]));
    ops.push(Operation::new(
        "c",
        vec![
            (cx + radius).into(),
            (cy + kr).into(),
            (cx + kr).into(),
            (cy + radius).into(),
            cx.into(),
            (cy + radius).into(),
        ],
    ));
    ops.push(Operation::new(
        "c",
        vec![
            (cx - kr).into(),
            (cy + radius).into(),
            (cx - radius).into(),
            (cy + kr).into(),
            (cx - radius).into(),
            cy.into(),
        ],
    ));
    ops.push(Operation::new(
        "c",
        vec![
            (cx - radius).into(),
            (cy - kr).into(),
            (cx - kr).into(),
            (cy - radius).into(),
            cx.into(),
            (cy - radius).into(),
        ],
    ));
    ops.push(Operation::new(
        "c",
        vec![
            (cx + kr).into(),
            (cy - radius).into(),
            (cx + radius).into(),
            (cy - kr).into(),
            (cx + radius).into(),
            cy.into(),
        ],
    ));
    ops.push(Operation::new("S", vec![]));
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, content: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(content), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn text_centered(ops: &mut Vec<Operation>, font: &str, size: f32, center_x: f32, y: f32, content: &str) {
    let x = center_x - estimated_width(size, content) / 2.0;
    text(ops, font, size, x.max(0.0), y, content);
}

fn text_right(ops: &mut Vec<Operation>, font: &str, size: f32, right_x: f32, y: f32, content: &str) {
    let x = right_x - estimated_width(size, content);
    text(ops, font, size, x.max(0.0), y, content);
}

/// Rough Helvetica width estimate, good enough for centering and
/// right-aligning short labels.
fn estimated_width(size: f32, content: &str) -> f32 {
    content.chars().count() as f32 * size * 0.5
}

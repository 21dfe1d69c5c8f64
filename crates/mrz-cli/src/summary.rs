//! Tables printed by `doc-types` and `encode --show-fields`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mrz_core::EncodedMrz;
use mrz_model::{CheckField, DocumentTypeDescriptor, FieldName};
use mrz_standards::Catalog;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn doc_types_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Layout"),
        header_cell("Doc/Extra/Opt/Name"),
        header_cell("Sub-types"),
        header_cell("Special check"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for descriptor in catalog.iter() {
        table.add_row(vec![
            Cell::new(&descriptor.code).add_attribute(Attribute::Bold),
            Cell::new(&descriptor.name),
            Cell::new(descriptor.layout),
            Cell::new(widths_label(descriptor)),
            count_cell(descriptor.sub_types.len()),
            descriptor
                .special_check
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

pub fn fields_table(mrz: &EncodedMrz, descriptor: &DocumentTypeDescriptor) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Width"),
        header_cell("Check"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for field in FieldName::ALL {
        if field == FieldName::Nationality && descriptor.hide_nationality {
            continue;
        }
        let value = mrz.fields.field(field);
        let check = CheckField::ALL
            .into_iter()
            .find(|check| check.field() == Some(field))
            .map_or_else(|| dim_cell("-"), |check| Cell::new(mrz.fields.check.get(check)));
        let label = if field == FieldName::OptNumber {
            descriptor.opt_number_label().to_string()
        } else {
            field.to_string()
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value),
            Cell::new(value.chars().count()),
            check,
        ]);
    }
    for check in [CheckField::Overall2, CheckField::Overall3] {
        table.add_row(vec![
            Cell::new(format!("check.{check}")).fg(Color::Cyan),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(mrz.fields.check.get(check)).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn widths_label(descriptor: &DocumentTypeDescriptor) -> String {
    let widths = descriptor.widths();
    format!(
        "{}/{}/{}/{}",
        widths.doc_number, widths.extra_number, widths.opt_number, widths.name
    )
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell("-")
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

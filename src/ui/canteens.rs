use crate::app::Message;
use crate::format;
use crate::ui::{card, header, stat_card};
use crate::view::{self, CanteenRollup};
use crate::workspace::Workspace;
use iced::widget::{Column, column, row, scrollable, text};
use iced::{Element, Length};

fn canteen_card<'a>(rollup: CanteenRollup<'a>, currency: &str) -> Element<'a, Message> {
    let mut body = column![
        text(rollup.canteen.name).size(20),
        text(format!("Penanggung jawab: {}", rollup.canteen.caretaker)),
        text(format!("Lokasi: {}", rollup.canteen.location)),
        row![
            text(format!("{} produk", rollup.product_count)).width(Length::Fill),
            text(format!("Stok {}", rollup.total_stock)).width(Length::Fill),
            text(format::currency(rollup.inventory_value, currency)).width(Length::Fill),
        ]
        .spacing(10),
    ]
    .spacing(6);

    if rollup.low_stock_count > 0 {
        body = body.push(text(format!(
            "{} produk stok rendah",
            rollup.low_stock_count
        )));
    }

    card(body)
}

pub fn view(workspace: &Workspace) -> Element<'_, Message> {
    let products = workspace.products();
    let currency = workspace.settings().currency.as_str();
    let rollups = view::canteen_rollups(workspace.canteens(), products, workspace.threshold());

    let summary = row![
        stat_card("Total Kantin", rollups.len().to_string()),
        stat_card("Total Produk", products.len().to_string()),
        stat_card(
            "Nilai Inventaris",
            format::currency(view::inventory_value(products), currency)
        ),
    ]
    .spacing(12);

    let cards = Column::with_children(
        rollups
            .into_iter()
            .map(|rollup| canteen_card(rollup, currency)),
    )
    .spacing(12);

    scrollable(
        column![
            header("Kantin", "Informasi kantin dan penanggung jawabnya"),
            summary,
            cards,
        ]
        .spacing(16),
    )
    .height(Length::Fill)
    .into()
}

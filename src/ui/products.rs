use crate::app::Message;
use crate::error::FormError;
use crate::form::{Modal, ProductDraft, ProductField};
use crate::format;
use crate::model::{Canteen, Product};
use crate::ui::{card, choices, field, form_error, header};
use crate::view::{
    CanteenFilter, Choice, Listing, PriceBracket, ProductQuery, SortKey, SortOrder, StockLevel,
};
use crate::workspace::Workspace;
use iced::widget::{Column, Row, button, column, row, scrollable, text, text_input};
use iced::{Element, Length};

fn stock_label(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Out => "Habis",
        StockLevel::Low => "Stok Rendah",
        StockLevel::Healthy => "Tersedia",
    }
}

fn canteen_choice(workspace: &Workspace, filter: CanteenFilter) -> Choice<Canteen> {
    match filter {
        CanteenFilter::All => Choice::All,
        CanteenFilter::Only(id) => workspace
            .canteen(id)
            .map_or(Choice::All, |canteen| Choice::Only(*canteen)),
    }
}

fn sort_button<'a>(query: &ProductQuery, key: SortKey) -> Element<'a, Message> {
    let label = match (query.sort_by == key, query.order) {
        (true, SortOrder::Ascending) => format!("{key} ↑"),
        (true, SortOrder::Descending) => format!("{key} ↓"),
        (false, _) => key.to_string(),
    };
    let style = if query.sort_by == key {
        button::primary
    } else {
        button::secondary
    };
    button(text(label))
        .style(style)
        .on_press(Message::ProductSortToggled(key))
        .into()
}

fn filters<'a>(workspace: &'a Workspace, query: &'a ProductQuery) -> Element<'a, Message> {
    let canteens = std::iter::once(Choice::All)
        .chain(workspace.canteens().iter().copied().map(Choice::Only));

    column![
        text_input("Cari produk...", &query.search)
            .on_input(Message::ProductSearchChanged)
            .width(Length::Fill),
        choices(canteens, canteen_choice(workspace, query.canteen), |choice| {
            Message::ProductCanteenSelected(match choice {
                Choice::All => CanteenFilter::All,
                Choice::Only(canteen) => CanteenFilter::Only(canteen.id),
            })
        }),
        choices(PriceBracket::ALL, query.price, Message::ProductPriceSelected),
        row![
            text("Urutkan:"),
            sort_button(query, SortKey::Name),
            sort_button(query, SortKey::Price),
            sort_button(query, SortKey::Stock),
        ]
        .spacing(6),
    ]
    .spacing(8)
    .into()
}

fn product_row<'a>(
    product: &'a Product,
    workspace: &'a Workspace,
    currency: &str,
) -> Element<'a, Message> {
    let canteen = workspace.canteen(product.canteen_id).map_or("-", |c| c.name);
    let level = StockLevel::classify(product.stock, workspace.threshold());
    let image = product.image_url.as_deref().unwrap_or("Tidak ada gambar");

    card(
        row![
            column![
                text(product.name.as_str()).size(18),
                text(product.description.as_str()).size(13),
                text(image).size(11),
            ]
            .spacing(2)
            .width(Length::FillPortion(4)),
            text(canteen).width(Length::FillPortion(2)),
            text(format::currency(product.price, currency)).width(Length::FillPortion(2)),
            text(format!("{} ({})", product.stock, stock_label(level)))
                .width(Length::FillPortion(2)),
            button("Edit").on_press(Message::ProductEdit(product.id)),
            button("Hapus")
                .style(button::danger)
                .on_press(Message::ProductDelete(product.id)),
        ]
        .spacing(10),
    )
}

fn editor<'a>(
    modal: &'a Modal<ProductDraft>,
    error: Option<&FormError>,
) -> Option<Element<'a, Message>> {
    let draft = modal.draft()?;
    let title = if modal.is_editing() {
        "Edit Produk"
    } else {
        "Tambah Produk"
    };
    let change =
        |f: fn(String) -> ProductField| move |value| Message::ProductFieldChanged(f(value));

    let canteens = Row::with_children(draft.canteens().iter().map(|canteen| {
        let style = if canteen.id == draft.canteen_id {
            button::primary
        } else {
            button::secondary
        };
        button(text(canteen.name))
            .style(style)
            .on_press(Message::ProductFieldChanged(ProductField::Canteen(canteen.id)))
            .into()
    }))
    .spacing(6);

    Some(card(
        column![
            text(title).size(22),
            field("Nama Produk", "Nama produk", &draft.name, change(ProductField::Name)),
            row![text("Kantin").width(180), canteens].spacing(10),
            field("Harga", "0", &draft.price, change(ProductField::Price)),
            field("Stok", "0", &draft.stock, change(ProductField::Stock)),
            field(
                "Deskripsi",
                "Deskripsi produk",
                &draft.description,
                change(ProductField::Description)
            ),
            field(
                "URL Gambar",
                "https://...",
                &draft.image_url,
                change(ProductField::ImageUrl)
            ),
            form_error(error),
            row![
                button(if modal.is_editing() { "Simpan" } else { "Tambah" })
                    .on_press(Message::ProductSubmit),
                button("Batal")
                    .style(button::secondary)
                    .on_press(Message::ProductCancel),
            ]
            .spacing(10),
        ]
        .spacing(10),
    ))
}

pub fn view<'a>(
    workspace: &'a Workspace,
    query: &'a ProductQuery,
    modal: &'a Modal<ProductDraft>,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    let currency = workspace.settings().currency.as_str();

    let list: Element<'a, Message> = match query.run(Some(workspace.products())) {
        Listing::Unloaded => text("Memuat data...").into(),
        Listing::NoMatches => text("Tidak ada produk yang ditemukan.").into(),
        Listing::Rows(rows) => Column::with_children(
            rows.into_iter()
                .map(|product| product_row(product, workspace, currency)),
        )
        .spacing(8)
        .into(),
    };

    let mut content = column![
        row![
            header("Manajemen Produk", "Kelola produk dari semua kantin"),
            button("Tambah Produk").on_press(Message::ProductCreate),
        ]
        .spacing(10),
    ]
    .spacing(14);

    if let Some(editor) = editor(modal, error) {
        content = content.push(editor);
    }

    content = content.push(filters(workspace, query)).push(list);

    scrollable(content).height(Length::Fill).into()
}

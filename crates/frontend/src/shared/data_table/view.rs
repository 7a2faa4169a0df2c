use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};
use wasm_bindgen_futures::spawn_local;

use super::cell::render_cell;
use super::delete_flow::{execute_delete, DeleteFlow, DeleteTarget};
use super::spec::TableSpec;
use super::state::{ViewState, ALL};
use crate::shared::api_utils::use_api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::SelectField;
use crate::shared::components::PaginationControls;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::notifications::use_notifications;

/// Rows of the current page, detached from the record signal
#[derive(Clone)]
struct PageSnapshot<T> {
    rows: Vec<T>,
    filtered_count: usize,
    page: usize,
    page_count: usize,
}

/// Interactive table over already-fetched records.
///
/// Search, filters, sorting, paging and column visibility live in the view.
/// Deleting a record issues one request and then calls `on_changed` so the
/// page can re-fetch; rows are never removed locally.
#[component]
pub fn DataTable<T>(
    spec: TableSpec<T>,
    /// Records as loaded by the page
    #[prop(into)]
    records: Signal<Vec<T>>,
    #[prop(optional, into)] loading: Signal<bool>,
    /// Called after a successful delete
    on_changed: Callback<()>,
    /// Body of the "View" modal; defaults to a list of every column
    #[prop(optional)]
    details: Option<Callback<T, AnyView>>,
    /// Handler of the "Edit" action; disabled when absent
    #[prop(optional)]
    on_edit: Option<Callback<T>>,
    /// Extra buttons rendered next to the export button
    #[prop(optional)]
    toolbar: Option<ChildrenFn>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let api = use_api();
    let notices = use_notifications();

    let state = RwSignal::new(ViewState::for_spec(&spec));
    let spec = StoredValue::new(spec);
    let viewing = RwSignal::new(None::<T>);
    let columns_open = RwSignal::new(false);

    let snapshot = Signal::derive(move || {
        let st = state.get();
        records.with(|rs| {
            spec.with_value(|sp| {
                let page = sp.page(rs, &st);
                PageSnapshot {
                    rows: page.rows.into_iter().cloned().collect(),
                    filtered_count: page.filtered_count,
                    page: page.page,
                    page_count: page.page_count,
                }
            })
        })
    });

    // Fresh records may shrink the filtered set below the current page
    Effect::new(move |_| {
        let count = records.with(|rs| {
            spec.with_value(|sp| state.with_untracked(|st| sp.filtered(rs, st).len()))
        });
        let out_of_range = state.with_untracked(|st| st.page != st.effective_page(count));
        if out_of_range {
            state.update(|st| st.clamp_page(count));
        }
    });

    let filtered_count = Signal::derive(move || snapshot.with(|s| s.filtered_count));
    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let current_sort = Signal::derive(move || state.with(|s| s.sort.clone()));

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    let on_page_change = Callback::new(move |page: usize| {
        let count = filtered_count.get_untracked();
        state.update(|s| s.go_to_page(page, count));
    });

    let on_page_size_change = Callback::new(move |rows: usize| {
        state.update(|s| s.set_rows_per_page(rows));
    });

    let delete_target = Memo::new(move |_| {
        state.with(|s| match &s.delete {
            DeleteFlow::ConfirmPending(t) | DeleteFlow::InFlight(t) => Some(t.clone()),
            DeleteFlow::Idle => None,
        })
    });
    let delete_busy = Signal::derive(move || state.with(|s| s.delete.is_busy()));

    let request_delete = move |target: DeleteTarget| {
        state.update(|s| {
            if !s.delete.initiate(target) {
                log::warn!("Delete already in progress");
            }
        });
    };

    let cancel_delete = Callback::new(move |_| state.update(|s| s.delete.cancel()));

    let confirm_delete = Callback::new(move |_| {
        let Some(target) = state.try_update(|s| s.delete.confirm()).flatten() else {
            return;
        };
        let client = api.clone();
        let (collection, entity) = spec.with_value(|sp| (sp.collection, sp.entity));
        spawn_local(async move {
            let notice = execute_delete(&client, collection, entity, &target).await;
            let succeeded = notice.is_success();
            notices.push(notice);
            state.try_update(|s| s.delete.finish());
            if succeeded {
                on_changed.run(());
            }
        });
    });

    let on_export = move |_| {
        let result = records.with_untracked(|rs| {
            spec.with_value(|sp| state.with_untracked(|st| export_to_excel(sp, rs, st)))
        });
        if let Err(e) = result {
            log::error!("Export failed: {}", e);
            notices.error(format!("Export failed: {}", e));
        }
    };

    let filters_view = spec.with_value(|sp| {
        sp.filters
            .iter()
            .map(|filter| {
                let key = filter.key;
                let mut options = vec![(ALL.to_string(), format!("All {}", filter.label))];
                options.extend(
                    filter
                        .options
                        .iter()
                        .map(|(value, label)| (value.to_string(), label.to_string())),
                );
                view! {
                    <SelectField
                        class="table-toolbar__filter"
                        value=Signal::derive(move || state.with(|s| s.filter_value(key).to_string()))
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| s.set_filter(key, value))
                        })
                        options=options
                    />
                }
            })
            .collect_view()
    });

    let columns_menu = move || {
        columns_open.get().then(|| {
            spec.with_value(|sp| {
                sp.columns
                    .iter()
                    .map(|column| {
                        let key = column.key;
                        view! {
                            <label class="column-menu__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.is_column_visible(key))
                                    on:change=move |_| {
                                        state.update(|s| {
                                            s.toggle_column(key);
                                        })
                                    }
                                />
                                {column.title}
                            </label>
                        }
                    })
                    .collect_view()
            })
        })
    };

    let header_row = move || {
        let visible = state.with(|s| s.visible_columns.clone());
        spec.with_value(|sp| {
            let cells = sp
                .columns
                .iter()
                .filter(|c| visible.contains(c.key))
                .map(|c| {
                    let title = c.title;
                    if c.sortable {
                        view! {
                            <SortableHeaderCell
                                label=title
                                sort_field=c.key
                                current_sort=current_sort
                                on_sort=on_sort
                            />
                        }
                        .into_any()
                    } else {
                        view! { <TableHeaderCell min_width=100.0>{title}</TableHeaderCell> }
                            .into_any()
                    }
                })
                .collect_view();
            let actions = sp.with_actions.then(|| {
                view! { <TableHeaderCell min_width=80.0>"Actions"</TableHeaderCell> }
            });
            view! { <TableRow>{cells}{actions}</TableRow> }
        })
    };

    let body_rows = move || {
        let rows = snapshot.with(|s| s.rows.clone());
        let view_state = state.get();

        rows.into_iter()
            .map(|record| {
                let (cells, target, with_actions) = spec.with_value(|sp| {
                    let cells = sp
                        .visible_cells(&record, &view_state)
                        .into_iter()
                        .map(|value| {
                            let rendered = render_cell(value, &view_state.search_text);
                            view! {
                                <TableCell>
                                    <TableCellLayout>{rendered}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    let target = DeleteTarget {
                        id: sp.id_of(&record),
                        label: sp.label_of(&record),
                    };
                    (cells, target, sp.with_actions)
                });

                let actions = with_actions.then(move || {
                    view! {
                        <TableCell>
                            <RowActions
                                record=record
                                target=target
                                on_view=Callback::new(move |r: T| viewing.set(Some(r)))
                                on_edit=on_edit
                                on_delete=Callback::new(request_delete)
                                busy=delete_busy
                            />
                        </TableCell>
                    }
                });

                view! { <TableRow>{cells}{actions}</TableRow> }
            })
            .collect_view()
    };

    let empty_state = move || {
        if loading.get() {
            Some(view! { <div class="table__empty">"Loading..."</div> }.into_any())
        } else if filtered_count.get() == 0 {
            Some(view! { <div class="table__empty">"No data"</div> }.into_any())
        } else {
            None
        }
    };

    let details_modal = move || {
        viewing.get().map(|record| {
            let title = spec.with_value(|sp| format!("{} details", sp.entity));
            let body = match details {
                Some(render) => render.run(record),
                None => default_details(&spec, &record),
            };
            view! {
                <Modal title=title on_close=Callback::new(move |_| viewing.set(None))>
                    {body}
                </Modal>
            }
        })
    };

    let confirm_modal = move || {
        delete_target.get().map(|target| {
            let entity = spec.with_value(|sp| sp.entity);
            view! {
                <ConfirmDialog
                    title=format!("Delete {}", entity)
                    message=format!(
                        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                        target.label
                    )
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                    busy=delete_busy
                />
            }
        })
    };

    let search_placeholder = spec.with_value(|sp| sp.search_placeholder);

    view! {
        <div class="data-table">
            <div class="table-toolbar">
                <div class="table-toolbar__left">
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.set_search(text)))
                        placeholder=search_placeholder
                    />
                    {filters_view}
                </div>
                <div class="table-toolbar__right">
                    <div class="column-menu">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| columns_open.update(|open| *open = !*open)
                        >
                            {icon("columns")}
                            " Columns"
                        </Button>
                        <div class="column-menu__list">{columns_menu}</div>
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                        {icon("download")}
                        " Export"
                    </Button>
                    {toolbar.as_ref().map(|t| t())}
                </div>
            </div>

            <Table>
                <TableHeader>{header_row}</TableHeader>
                <TableBody>{body_rows}</TableBody>
            </Table>
            {empty_state}

            <PaginationControls
                current_page=Signal::derive(move || snapshot.with(|s| s.page))
                total_pages=Signal::derive(move || snapshot.with(|s| s.page_count))
                total_count=filtered_count
                page_size=Signal::derive(move || state.with(|s| s.rows_per_page))
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />

            {details_modal}
            {confirm_modal}
        </div>
    }
}

/// View/Edit/Delete drop-down of one row
#[component]
fn RowActions<T>(
    record: T,
    target: DeleteTarget,
    on_view: Callback<T>,
    on_edit: Option<Callback<T>>,
    on_delete: Callback<DeleteTarget>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let open = RwSignal::new(false);
    let record = StoredValue::new(record);
    let target = StoredValue::new(target);

    let menu = move || {
        open.get().then(|| {
            view! {
                <div class="row-actions__menu" on:mouseleave=move |_| open.set(false)>
                    <button
                        class="row-actions__item"
                        on:click=move |_| {
                            open.set(false);
                            on_view.run(record.get_value());
                        }
                    >
                        {icon("eye")}
                        " View"
                    </button>
                    <button
                        class="row-actions__item"
                        disabled=on_edit.is_none()
                        on:click=move |_| {
                            open.set(false);
                            if let Some(edit) = on_edit {
                                edit.run(record.get_value());
                            }
                        }
                    >
                        {icon("edit")}
                        " Edit"
                    </button>
                    <button
                        class="row-actions__item row-actions__item--danger"
                        disabled=move || busy.get()
                        on:click=move |_| {
                            open.set(false);
                            on_delete.run(target.get_value());
                        }
                    >
                        {icon("trash")}
                        " Delete"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="row-actions">
            <button
                class="button button--icon"
                title="Actions"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("more")}
            </button>
            {menu}
        </div>
    }
}

/// Every column of the record as label/value pairs
fn default_details<T: Send + Sync + 'static>(
    spec: &StoredValue<TableSpec<T>>,
    record: &T,
) -> AnyView {
    let rows = spec.with_value(|sp| {
        sp.columns
            .iter()
            .map(|c| {
                view! {
                    <div class="details__row">
                        <dt class="details__label">{c.title}</dt>
                        <dd class="details__value">{render_cell(c.value(record), "")}</dd>
                    </div>
                }
            })
            .collect_view()
    });
    view! { <dl class="details">{rows}</dl> }.into_any()
}

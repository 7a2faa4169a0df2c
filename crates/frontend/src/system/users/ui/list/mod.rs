use contracts::system::users::UserAccount;
use leptos::prelude::*;

use crate::shared::data_table::{CellValue, Column, DataTable, FilterDef, FlagLabels, TableSpec};
use crate::shared::loader::use_loader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::users::api::{fetch_users, USERS_COLLECTION};

const VERIFIED: FlagLabels = FlagLabels::new("Verified", "Not Verified");

pub fn user_table_spec() -> TableSpec<UserAccount> {
    TableSpec::new("User", "Users", USERS_COLLECTION, |u: &UserAccount| u.id.clone())
        .search("Search by name...", |u| Some(u.user_name.clone()))
        .label(|u| u.user_name.clone())
        .column(Column::new("userName", "Username", |u: &UserAccount| {
            CellValue::Captioned {
                text: u.user_name.clone(),
                caption: u.email.clone(),
            }
        }))
        .column(Column::new("email", "Email", |u: &UserAccount| CellValue::text(&u.email)))
        .column(
            Column::new("permissions", "Permissions", |u: &UserAccount| {
                CellValue::Joined(u.permission_kinds().to_vec(), "None")
            })
            .unsortable(),
        )
        .column(Column::new("isVerified", "Verified", |u: &UserAccount| {
            CellValue::Flag(u.is_verified, VERIFIED)
        }))
        .column(
            Column::new("createdAt", "Registered", |u: &UserAccount| {
                CellValue::date_or_missing(u.created_at.as_deref())
            })
            .hidden(),
        )
        .column(
            Column::new("cameFrom", "Source", |u: &UserAccount| {
                CellValue::text_or_missing(u.came_from.as_deref())
            })
            .hidden(),
        )
        .filter(FilterDef::new(
            "verified",
            "Verification",
            vec![("verified", "Verified"), ("unverified", "Not Verified")],
            |u: &UserAccount| {
                Some(if u.is_verified { "verified" } else { "unverified" }.to_string())
            },
        ))
        .default_sort("userName")
}

#[component]
pub fn UserList() -> impl IntoView {
    let loader = use_loader("users", fetch_users);

    view! {
        <PageFrame
            page_id="sys_user--list"
            category=PAGE_CAT_LIST
            title="Users"
            error=loader.error
            loading=loader.loading
            on_refresh=loader.reload
        >
            <DataTable
                spec=user_table_spec()
                records=loader.records
                loading=loader.loading
                on_changed=loader.reload
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::ViewState;
    use contracts::system::users::Permissions;

    fn user(id: &str, name: &str, kinds: &[&str], verified: bool) -> UserAccount {
        UserAccount {
            id: id.into(),
            user_name: name.into(),
            email: format!("{}@example.com", name),
            permissions: (!kinds.is_empty()).then(|| Permissions {
                kinds: kinds.iter().map(|k| k.to_string()).collect(),
            }),
            is_verified: verified,
            created_at: None,
            updated_at: None,
            came_from: None,
        }
    }

    #[test]
    fn test_permissions_cell() {
        let spec = user_table_spec();
        let column = spec.find_column("permissions").unwrap();
        let admin = user("u1", "ann", &["admin", "editor"], true);
        let plain = user("u2", "bob", &[], false);
        assert_eq!(column.value(&admin).display(), "admin, editor");
        assert_eq!(column.value(&plain).display(), "None");
        assert!(!spec.is_sortable("permissions"));
    }

    #[test]
    fn test_name_cell_carries_email() {
        let spec = user_table_spec();
        let value = spec.find_column("userName").unwrap().value(&user("u1", "ann", &[], true));
        assert_eq!(
            value,
            CellValue::Captioned {
                text: "ann".into(),
                caption: "ann@example.com".into(),
            }
        );
    }

    #[test]
    fn test_verification_filter() {
        let spec = user_table_spec();
        let records = vec![
            user("u1", "Carol", &[], true),
            user("u2", "alice", &[], false),
            user("u3", "Bob", &[], true),
        ];
        let mut state = ViewState::for_spec(&spec);
        state.set_filter("verified", "verified");
        let names: Vec<_> = spec
            .page(&records, &state)
            .rows
            .iter()
            .map(|u| u.user_name.clone())
            .collect();
        assert_eq!(names, ["Bob", "Carol"]);
    }
}

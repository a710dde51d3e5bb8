use crate::{api::User, state::use_stores, utils::nav};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let ctx = use_stores();
    let session = ctx.session;
    let is_authenticated = create_memo(move |_| session.get().authenticated);
    create_effect(move |_| {
        if !session.get().authenticated {
            nav::redirect_to("/login");
        }
    });
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let ctx = use_stores();
    let session = ctx.session;
    let is_authenticated = create_memo(move |_| session.get().authenticated);
    let is_admin = create_memo(move |_| is_admin_user(session.get().user.as_ref()));
    create_effect(move |_| {
        let state = session.get();
        if !state.authenticated {
            nav::redirect_to("/login");
        } else if !is_admin_user(state.user.as_ref()) {
            nav::redirect_to("/");
        }
    });
    view! {
        <Show
            when=move || should_render_admin_children(is_authenticated.get(), is_admin.get())
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&User>) -> bool {
    user.map(|user| user.role == "admin").unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin
}

#[cfg(test)]
mod tests {
    use super::{is_admin_user, should_render_admin_children};
    use crate::api::User;

    fn user(role: &str) -> User {
        User {
            id: 1,
            name: "Amel".into(),
            email: "a@b.com".into(),
            role: role.into(),
            phone: None,
            status: None,
        }
    }

    #[test]
    fn admin_check_requires_admin_role() {
        assert!(!is_admin_user(None));
        assert!(!is_admin_user(Some(&user("client"))));
        assert!(is_admin_user(Some(&user("admin"))));
    }

    #[test]
    fn admin_children_need_both_authentication_and_role() {
        assert!(!should_render_admin_children(false, false));
        assert!(!should_render_admin_children(false, true));
        assert!(!should_render_admin_children(true, false));
        assert!(should_render_admin_children(true, true));
    }
}

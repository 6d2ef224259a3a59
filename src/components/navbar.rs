use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::routes::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_auth();

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <Link<Route> classes="navbar-brand" to={Route::Home}>{ "📚 LearnMap" }</Link<Route>>
            <div class="navbar-links">
                <Link<Route> to={Route::Home}>{ "Khóa học" }</Link<Route>>
                <Link<Route> to={Route::Forum}>{ "Diễn đàn" }</Link<Route>>
                <Link<Route> to={Route::Plans}>{ "Gói học" }</Link<Route>>
                <Link<Route> to={Route::CareerTest}>{ "Trắc nghiệm nghề nghiệp" }</Link<Route>>
            </div>
            <div class="navbar-session">
                {
                    match session.user() {
                        Some(user) => html! {
                            <>
                                if user.role.is_staff_level() {
                                    <Link<Route> classes="btn btn-ghost" to={Route::Dashboard}>{ "Quản trị" }</Link<Route>>
                                }
                                <span class="navbar-user">{ user.display_name() }</span>
                                <button class="btn btn-ghost" onclick={on_logout}>{ "Đăng xuất" }</button>
                            </>
                        },
                        None => html! {
                            <>
                                <Link<Route> classes="btn btn-ghost" to={Route::Login}>{ "Đăng nhập" }</Link<Route>>
                                <Link<Route> classes="btn btn-primary" to={Route::Register}>{ "Đăng ký" }</Link<Route>>
                            </>
                        },
                    }
                }
            </div>
        </nav>
    }
}

// ============================================================
// 🗂️ DASHBOARD - khung quản trị
// ============================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Navbar, RouteGuard};
use crate::hooks::use_auth;
use crate::models::Role;
use crate::routes::DashboardRoute;
use crate::views::admin_account::AdminAccountView;
use crate::views::admin_career_question::AdminCareerQuestionView;
use crate::views::admin_category::AdminCategoryView;
use crate::views::admin_course::AdminCourseView;
use crate::views::admin_plan::AdminPlanView;
use crate::views::course_builder::CourseBuilderView;

fn switch_dashboard(route: DashboardRoute) -> Html {
    match route {
        DashboardRoute::Overview => html! { <DashboardOverview /> },
        DashboardRoute::Categories => html! { <AdminCategoryView /> },
        DashboardRoute::Courses => html! { <AdminCourseView /> },
        DashboardRoute::CourseBuilder => html! { <CourseBuilderView /> },
        DashboardRoute::CareerQuestions => html! { <AdminCareerQuestionView /> },
        // Sólo ADMIN: guard anidado, STAFF rebota a Home.
        DashboardRoute::Accounts => html! {
            <RouteGuard allowed_roles={vec![Role::Admin]}>
                <AdminAccountView />
            </RouteGuard>
        },
        DashboardRoute::Plans => html! {
            <RouteGuard allowed_roles={vec![Role::Admin]}>
                <AdminPlanView />
            </RouteGuard>
        },
        DashboardRoute::NotFound => html! {
            <Redirect<DashboardRoute> to={DashboardRoute::Overview} />
        },
    }
}

/// Shell para STAFF y ADMIN. Las secciones de cuentas y planes revalidan
/// con su propio guard.
#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    html! {
        <>
            <Navbar />
            <RouteGuard allowed_roles={vec![Role::Admin, Role::Staff]}>
                <div class="dashboard">
                    <DashboardSidebar />
                    <section class="dashboard-content">
                        <Switch<DashboardRoute> render={switch_dashboard} />
                    </section>
                </div>
            </RouteGuard>
        </>
    }
}

#[function_component(DashboardSidebar)]
fn dashboard_sidebar() -> Html {
    let auth = use_auth();
    let is_admin = auth.user().map(|user| user.role == Role::Admin).unwrap_or(false);

    html! {
        <aside class="dashboard-sidebar">
            <Link<DashboardRoute> to={DashboardRoute::Overview}>{ "📊 Tổng quan" }</Link<DashboardRoute>>
            <Link<DashboardRoute> to={DashboardRoute::Categories}>{ "🏷️ Danh mục" }</Link<DashboardRoute>>
            <Link<DashboardRoute> to={DashboardRoute::Courses}>{ "📚 Khóa học" }</Link<DashboardRoute>>
            <Link<DashboardRoute> to={DashboardRoute::CourseBuilder}>{ "🧱 Xây dựng khóa học" }</Link<DashboardRoute>>
            <Link<DashboardRoute> to={DashboardRoute::CareerQuestions}>{ "🧭 Câu hỏi nghề nghiệp" }</Link<DashboardRoute>>
            if is_admin {
                <Link<DashboardRoute> to={DashboardRoute::Accounts}>{ "👥 Tài khoản" }</Link<DashboardRoute>>
                <Link<DashboardRoute> to={DashboardRoute::Plans}>{ "💎 Gói học" }</Link<DashboardRoute>>
            }
        </aside>
    }
}

#[function_component(DashboardOverview)]
fn dashboard_overview() -> Html {
    let auth = use_auth();
    let greeting = auth
        .user()
        .map(|user| format!("Xin chào, {}!", user.display_name()))
        .unwrap_or_default();

    html! {
        <div class="dashboard-overview">
            <h1>{ greeting }</h1>
            <p>{ "Chọn một mục ở thanh bên để bắt đầu quản trị nội dung." }</p>
        </div>
    }
}

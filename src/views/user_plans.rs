// ============================================================
// 💎 PLANS - gói học và đăng ký
// ============================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{toast, Navbar, PaymentModal};
use crate::events::{self, AppEvent};
use crate::hooks::use_auth;
use crate::models::{Plan, SubscriptionRequest};
use crate::routes::Route;
use crate::services::{plan_service, subscription_service};
use crate::stores::session;
use crate::utils::format::format_price;
use crate::utils::LocalStorage;

#[function_component(UserPlansView)]
pub fn user_plans_view() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("UserPlansView debe vivir bajo un Router");
    let plans = use_state(Vec::<Plan>::new);
    let paying = use_state(|| None::<Plan>);
    let loading = use_state(|| true);

    {
        let plans = plans.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(response) = plan_service::get_all_public_plans().await {
                    if let Some(list) = response.into_data() {
                        plans.set(list);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_choose = {
        let auth = auth.clone();
        let paying = paying.clone();
        Callback::from(move |plan: Plan| {
            if auth.is_authenticated() {
                paying.set(Some(plan));
            } else {
                session::remember_intended_route(&LocalStorage, "/plans");
                events::publish(AppEvent::SessionExpired);
            }
        })
    };

    let on_payment_success = {
        let auth = auth.clone();
        let paying = paying.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(plan) = (*paying).clone() else {
                return;
            };
            let Some(account_id) = auth.user().map(|user| user.id) else {
                return;
            };
            paying.set(None);
            let navigator = navigator.clone();
            spawn_local(async move {
                let request = SubscriptionRequest { account_id, plan_id: plan.id };
                if subscription_service::create_subscription(&request).await.is_ok() {
                    toast::success("Đăng ký gói học thành công! Vui lòng đăng nhập lại.");
                    // La suscripción cambia los permisos del token: sesión
                    // fuera y a loguearse de nuevo.
                    session::clear_all(&LocalStorage);
                    navigator.push(&Route::Login);
                }
            });
        })
    };

    let on_close_payment = {
        let paying = paying.clone();
        Callback::from(move |_| paying.set(None))
    };

    html! {
        <>
            <Navbar />
            <main class="plans-page">
                <h1>{ "Chọn gói học phù hợp" }</h1>
                if *loading {
                    <div class="loading">{ "⏳ Đang tải gói học..." }</div>
                } else {
                    <div class="plan-grid">
                        { for plans.iter().map(|plan| {
                            let on_click = {
                                let on_choose = on_choose.clone();
                                let plan = plan.clone();
                                Callback::from(move |_: MouseEvent| on_choose.emit(plan.clone()))
                            };
                            html! {
                                <article key={plan.id.to_string()} class="plan-card">
                                    <span class="plan-icon">{ plan.icon() }</span>
                                    <h2>{ &plan.name }</h2>
                                    if let Some(description) = &plan.description {
                                        <p>{ description }</p>
                                    }
                                    <p class="plan-price">{ format_price(plan.price) }</p>
                                    <p class="plan-duration">{ format!("{} ngày", plan.duration_in_days) }</p>
                                    <ul class="plan-features">
                                        { for plan.features.iter().map(|feature| html! {
                                            <li key={feature.id.to_string()}>{ format!("✔ {}", feature.name) }</li>
                                        }) }
                                    </ul>
                                    <button class="btn btn-primary" onclick={on_click}>
                                        { "Chọn gói này" }
                                    </button>
                                </article>
                            }
                        }) }
                    </div>
                }
                if let Some(plan) = &*paying {
                    <PaymentModal
                        plan={plan.clone()}
                        on_close={on_close_payment}
                        on_payment_success={on_payment_success}
                    />
                }
            </main>
        </>
    }
}

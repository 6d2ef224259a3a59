// ============================================================
// 💳 PAYMENT MODAL - pago simulado con QR y cuenta regresiva
// ============================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::Plan;
use crate::utils::format::{format_countdown, format_price};

const QR_EXPIRY_SECONDS: u32 = 120;
const MOCK_PROCESS_MS: u32 = 2_000;
const MOCK_SUCCESS_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PaymentMethod {
    Momo,
    Banking,
}

impl PaymentMethod {
    fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Momo => "Ví MoMo",
            PaymentMethod::Banking => "Chuyển khoản ngân hàng",
        }
    }

    fn account(&self) -> &'static str {
        match self {
            PaymentMethod::Momo => "0901234567",
            PaymentMethod::Banking => "LEARNMAP 19036789",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentModalProps {
    pub plan: Plan,
    pub on_close: Callback<()>,
    pub on_payment_success: Callback<()>,
}

/// Demo de pago: no hay pasarela real. Tras "pagar" espera 2s, muestra el
/// éxito y otros 2s después avisa al padre para crear la suscripción.
#[function_component(PaymentModal)]
pub fn payment_modal(props: &PaymentModalProps) -> Html {
    let method = use_state(|| PaymentMethod::Momo);
    let processing = use_state(|| false);
    let succeeded = use_state(|| false);
    let countdown = use_state(|| QR_EXPIRY_SECONDS);

    // El QR "caduca" y se regenera al cambiar de método.
    {
        let countdown = countdown.clone();
        use_effect_with(*method, move |_| {
            countdown.set(QR_EXPIRY_SECONDS);
            || ()
        });
    }

    // Tick de un segundo. Reprogramado en cada cambio porque el handle
    // capturado ve el valor del render que lo creó.
    {
        let countdown = countdown.clone();
        use_effect_with(*countdown, move |remaining| {
            let next = if *remaining == 0 { QR_EXPIRY_SECONDS } else { *remaining - 1 };
            let timeout = Timeout::new(1_000, move || countdown.set(next));
            move || drop(timeout)
        });
    }

    let on_pay = {
        let processing = processing.clone();
        let succeeded = succeeded.clone();
        let on_payment_success = props.on_payment_success.clone();
        Callback::from(move |_: MouseEvent| {
            if *processing || *succeeded {
                return;
            }
            processing.set(true);
            let processing = processing.clone();
            let succeeded = succeeded.clone();
            let on_payment_success = on_payment_success.clone();
            Timeout::new(MOCK_PROCESS_MS, move || {
                processing.set(false);
                succeeded.set(true);
                Timeout::new(MOCK_SUCCESS_MS, move || on_payment_success.emit(())).forget();
            })
            .forget();
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let payment_info = format!(
        "LEARNMAP|{}|{}|{}",
        props.plan.code,
        props.plan.price,
        method.account()
    );
    let qr_url = format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=250x250&data={}",
        String::from(js_sys::encode_uri_component(&payment_info))
    );

    let select_method = |target: PaymentMethod| {
        let method = method.clone();
        Callback::from(move |_: MouseEvent| method.set(target))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal payment-modal">
                <div class="modal-header">
                    <h2>{ format!("Thanh toán gói {}", props.plan.name) }</h2>
                    <button class="modal-close" onclick={on_close}>{ "✕" }</button>
                </div>
                if *succeeded {
                    <div class="payment-success">
                        <span class="payment-success-icon">{ "🎉" }</span>
                        <p>{ "Thanh toán thành công! Đang kích hoạt gói học..." }</p>
                    </div>
                } else {
                    <div class="payment-body">
                        <div class="payment-methods">
                            <button
                                class={classes!("method-tab", (*method == PaymentMethod::Momo).then_some("active"))}
                                onclick={select_method(PaymentMethod::Momo)}
                            >
                                { PaymentMethod::Momo.label() }
                            </button>
                            <button
                                class={classes!("method-tab", (*method == PaymentMethod::Banking).then_some("active"))}
                                onclick={select_method(PaymentMethod::Banking)}
                            >
                                { PaymentMethod::Banking.label() }
                            </button>
                        </div>
                        <img class="payment-qr" src={qr_url} alt="QR thanh toán" />
                        <p class="payment-amount">{ format_price(props.plan.price) }</p>
                        <p class="payment-account">{ method.account() }</p>
                        <p class="payment-countdown">
                            { format!("Mã QR hết hạn sau {}", format_countdown(*countdown)) }
                        </p>
                        <button class="btn btn-primary" onclick={on_pay} disabled={*processing}>
                            { if *processing { "Đang xử lý..." } else { "Tôi đã thanh toán" } }
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}

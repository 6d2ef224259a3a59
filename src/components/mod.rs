pub mod course_detail;
pub mod login_modal;
pub mod navbar;
pub mod payment_modal;
pub mod post_detail_modal;
pub mod route_guard;
pub mod toast;

pub use course_detail::CourseDetail;
pub use login_modal::LoginModal;
pub use navbar::Navbar;
pub use payment_modal::PaymentModal;
pub use post_detail_modal::PostDetailModal;
pub use route_guard::RouteGuard;
pub use toast::ToastHost;

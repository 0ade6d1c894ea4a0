fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(lume_web::App);
}

fn main() {
    dioxus::launch(artfind_web::App);
}

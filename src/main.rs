fn main() {
    courier_pwa::start();
}

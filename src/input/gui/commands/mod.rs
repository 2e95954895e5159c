pub mod run_gui;

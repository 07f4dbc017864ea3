pub mod phonepe;

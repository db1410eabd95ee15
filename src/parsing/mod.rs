
//! Tokenizing and converting infix expressions.

pub mod operator;
pub mod shunting_yard;
pub mod tokenizer;

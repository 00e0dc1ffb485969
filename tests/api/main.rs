mod contact;
mod health_check;

pub mod vitals; // Ordered regex extraction of heart rate, blood pressure, temperature

// src/letters/templates.rs
//
// Letter bodies. Each template is a plain function over `LetterFields`; the
// table in `template_for` is the only place a (category, variant) pair is
// mapped to text.

use super::{Category, Variant};

/// Values substituted into a letter. Everything is pre-formatted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterFields<'a> {
    pub agent_first_name: &'a str,
    pub short_address: &'a str,
    pub list_price: String,
    pub mortgage_balance: String,
    pub city: &'a str,
    pub signature: &'a str,
}

pub type RenderFn = fn(&LetterFields<'_>) -> String;

pub fn template_for(category: Category, variant: Variant) -> RenderFn {
    use Category::*;
    use Variant::*;

    match (category, variant) {
        (NoMortgage, V1) => no_mortgage_v1,
        (NoMortgage, V2) => no_mortgage_v2,
        (NoMortgage, V3) => no_mortgage_v3,
        (LowEquity, V1) => low_equity_v1,
        (LowEquity, V2) => low_equity_v2,
        (LowEquity, V3) => low_equity_v3,
        (Standard, V1) => standard_v1,
        (Standard, V2) => standard_v2,
        (Standard, V3) => standard_v3,
        (SellerFinancing, V1) => seller_financing_v1,
        (SellerFinancing, V2) => seller_financing_v2,
        (SellerFinancing, V3) => seller_financing_v3,
        (Hybrid, V1) => hybrid_v1,
        (Hybrid, V2) => hybrid_v2,
        (Hybrid, V3) => hybrid_v3,
        (SubjectTo, V1) => subject_to_v1,
        (SubjectTo, V2) => subject_to_v2,
        (SubjectTo, V3) => subject_to_v3,
        (Unknown, _) => unknown,
    }
}

fn no_mortgage_v1(f: &LetterFields<'_>) -> String {
    format!(
        "Hey {name},

Are you still trying to sell the house on {addr}? I think {price} sounds pretty reasonable for it. Would your seller be open to a conversation about possibly selling on terms? Most of the other houses I've bought in this area, I gave the seller a down payment and paid them over time. I pay for agent commissions and closing costs typically as well.

Is this possibly worth a further conversation, or am I being completely unreasonable?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        sig = f.signature,
    )
}

fn no_mortgage_v2(f: &LetterFields<'_>) -> String {
    format!(
        "Hi {name},

Quick question about your listing on {addr}. At {price} I'm interested, and since it looks like the property is owned free and clear, I wanted to ask whether your seller would consider carrying the financing. I'd put money down at closing and make monthly payments to them after that, and I'd cover your commission and the closing costs.

Would that be worth a short call?

Best,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        sig = f.signature,
    )
}

fn no_mortgage_v3(f: &LetterFields<'_>) -> String {
    format!(
        "{name},

I saw the house on {addr} is still available. {price} works for me as a price. Because there doesn't seem to be a loan on it, I could offer your seller a down payment now and steady monthly income afterwards instead of one lump sum. Commission and closing costs would be on me.

Open to talking it through?

{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        sig = f.signature,
    )
}

fn low_equity_v1(f: &LetterFields<'_>) -> String {
    format!(
        "Hey {name},

Are you still trying to sell the house on {addr}? From what I can see online, it looks like your seller has a remaining mortgage balance of about {balance}. With how tough the market is right now, it seems like it might be hard for them to sell this without coming out of pocket. If I could pay for all closing costs (including your commission) and pay some cash to them, do you think we could have a conversation about how my process works?

Or am I being completely unreasonable?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

fn low_equity_v2(f: &LetterFields<'_>) -> String {
    format!(
        "Hi {name},

I'm reaching out about {addr}. Public records suggest the seller still owes around {balance}, which doesn't leave much room after commission and closing costs. I can take care of those costs, including your commission, and still put some cash in the seller's pocket.

Would you be open to hearing how that works?

Best,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

fn low_equity_v3(f: &LetterFields<'_>) -> String {
    format!(
        "{name},

Is {addr} still on the market? If the payoff is close to {balance} like it looks online, your seller may have to bring money to closing on a traditional sale. I can cover every closing cost, your commission included, and pay them some cash on top.

Worth a five minute conversation?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

fn standard_v1(f: &LetterFields<'_>) -> String {
    format!(
        "Hey {name},

Are you still trying to sell the house on {addr}? From what I can see online, it looks like I could probably pay {price} for it.
I'm a local investor, and I've worked with other sellers in {city} who were able to sell to me on terms that made sense for them. Basically how it works is I cover all closing costs (including your commission), pay them some cash upfront, and pay out their equity over time. Do you think it'd be worth having a quick chat about how my process could work for them?

Or am I way off base here?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        city = f.city,
        sig = f.signature,
    )
}

fn standard_v2(f: &LetterFields<'_>) -> String {
    format!(
        "Hi {name},

I'm interested in the house on {addr} and could likely pay close to {price}. I buy homes around {city} on terms: I cover closing costs and your commission, pay the seller some cash at closing, and pay the rest of their equity over time.

Could we set up a quick call to see if that fits what your seller needs?

Best,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        city = f.city,
        sig = f.signature,
    )
}

fn standard_v3(f: &LetterFields<'_>) -> String {
    format!(
        "{name},

Is {addr} still available? {price} looks about right to me. I'm a local buyer and I've closed with a few sellers in {city} using a simple structure: cash upfront, their equity paid out monthly, and all closing costs plus your commission covered by me.

Would your seller want to hear more?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        city = f.city,
        sig = f.signature,
    )
}

fn seller_financing_v1(f: &LetterFields<'_>) -> String {
    format!(
        "Hey {name},

Are you still trying to sell the house on {addr}? It looks like your seller has a lot of equity in it, so I wanted to ask if they'd consider financing part of the sale themselves. I could pay {price}, put money down at closing, and pay them monthly with interest. I'd cover closing costs and your commission as well.

Is that worth a quick conversation?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        sig = f.signature,
    )
}

fn seller_financing_v2(f: &LetterFields<'_>) -> String {
    format!(
        "Hi {name},

I'm looking at {addr} in {city}. With the equity your seller appears to have, a seller-financed sale at {price} could give them a steady monthly return instead of a lump sum. Down payment, closing costs and your commission would all be handled on my end.

Could we talk about it?

Best,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        city = f.city,
        sig = f.signature,
    )
}

fn seller_financing_v3(f: &LetterFields<'_>) -> String {
    format!(
        "{name},

Would the owner of {addr} be open to carrying a note? I'd pay {price} with a down payment up front and monthly payments after. Your commission and the closing costs are on me.

Let me know if that's worth exploring.

{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        price = f.list_price,
        sig = f.signature,
    )
}

fn hybrid_v1(f: &LetterFields<'_>) -> String {
    format!(
        "Hey {name},

Are you still trying to sell the house on {addr}? From what I can see, there's about {balance} owed on it. I could pay {price} by taking over the existing loan and paying your seller the rest of their equity partly upfront and partly over time. I'd cover closing costs and your commission too.

Would that be worth a quick chat?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        price = f.list_price,
        sig = f.signature,
    )
}

fn hybrid_v2(f: &LetterFields<'_>) -> String {
    format!(
        "Hi {name},

About {addr}: with roughly {balance} in loans against it, I think I could get your seller to {price}. I'd keep their current mortgage in place, pay part of their equity at closing and the balance in monthly payments. Closing costs and commission would be mine.

Is your seller open to something like that?

Best,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        price = f.list_price,
        sig = f.signature,
    )
}

fn hybrid_v3(f: &LetterFields<'_>) -> String {
    format!(
        "{name},

Still selling {addr} in {city}? I can offer {price}: I'd take over the roughly {balance} mortgage and pay the seller's equity over time, with some cash at closing. I'd also pay your commission and all closing costs.

Worth discussing?

{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        city = f.city,
        price = f.list_price,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

fn subject_to_v1(f: &LetterFields<'_>) -> String {
    format!(
        "Hey {name},

Are you still trying to sell the house on {addr}? It looks like your seller owes around {balance}, which could make a traditional sale tough once commission and closing costs come out. I could take over their existing payments, cover all closing costs including your commission, and give them some cash to move on.

Would your seller be open to a conversation?

Thanks,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

fn subject_to_v2(f: &LetterFields<'_>) -> String {
    format!(
        "Hi {name},

I'm reaching out about {addr}. With about {balance} owed, your seller may not net much on a regular sale. I can buy it subject to the current loan, keep the payments current, pay your commission and closing costs, and hand the seller some cash at closing.

Would it help to walk through how that works?

Best,
{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

fn subject_to_v3(f: &LetterFields<'_>) -> String {
    format!(
        "{name},

Is {addr} in {city} still for sale? If the loan balance is near {balance}, I could step in and take over the payments so your seller walks away clean with some cash, and I'd cover your commission and closing.

Open to a quick call?

{sig}",
        name = f.agent_first_name,
        addr = f.short_address,
        city = f.city,
        balance = f.mortgage_balance,
        sig = f.signature,
    )
}

/// Rows whose LTV could not be read have no letter; the placeholder says so.
fn unknown(f: &LetterFields<'_>) -> String {
    let addr = if f.short_address.is_empty() {
        "this listing"
    } else {
        f.short_address
    };

    format!(
        "[NO LETTER GENERATED]

No letter template applies to {addr}: the LTV column is missing or could not be read.
Fix the LTV value in the spreadsheet and upload it again to generate a letter."
    )
}

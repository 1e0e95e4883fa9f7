use linklists::{DoublyLinkedList, Value};

// cargo run --example doubly_walkthrough
fn main() {
    let mut list = DoublyLinkedList::new();

    list.push_front(10);
    list.push_front(20);
    list.push_front(30);
    println!("{}", list); // 30 <-> 20 <-> 10

    list.push_back(40);
    println!("{}", list); // 30 <-> 20 <-> 10 <-> 40

    list.insert(2, 50).unwrap();
    println!("{}", list); // 30 <-> 20 <-> 50 <-> 10 <-> 40

    // the back links let the same chain be read tail-first
    let backwards: Vec<Value> = list.iter().rev().copied().collect();
    println!("{:?}", backwards);
}
